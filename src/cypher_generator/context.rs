use super::errors::CypherGeneratorError;
use crate::config::TranslatorConfig;
use crate::graph_catalog::{ObjectType, Schema};

/// Per-statement compilation state: the pattern variable and type currently in scope.
///
/// Created for each root selection and extended once per relation level; nothing
/// outlives the statement it was built for.
#[derive(Debug, Clone)]
pub struct CompilationContext<'s> {
    pub schema: &'s Schema,
    pub config: &'s TranslatorConfig,
    pub variable: String,
    pub object_type: &'s ObjectType,
    pub depth: usize,
    /// Variables bound by this scope and every enclosing one.
    bound: Vec<String>,
}

impl<'s> CompilationContext<'s> {
    pub fn root(
        schema: &'s Schema,
        config: &'s TranslatorConfig,
        variable: impl Into<String>,
        object_type: &'s ObjectType,
    ) -> Self {
        let variable = variable.into();
        CompilationContext {
            schema,
            config,
            bound: vec![variable.clone()],
            variable,
            object_type,
            depth: 1,
        }
    }

    pub fn is_bound(&self, variable: &str) -> bool {
        self.bound.iter().any(|name| name == variable)
    }

    /// Name for a variable introduced one level down. An enclosing binding with the
    /// same name would constrain the inner pattern, so clashes get the child depth
    /// appended, e.g. `actorsActor4`.
    pub fn child_variable(&self, base: String) -> String {
        if !self.is_bound(&base) {
            return base;
        }
        let mut suffix = self.depth + 1;
        loop {
            let candidate = format!("{}{}", base, suffix);
            if !self.is_bound(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Scope for the target of a relation one level below this one.
    pub fn descend(
        &self,
        variable: impl Into<String>,
        object_type: &'s ObjectType,
    ) -> Result<Self, CypherGeneratorError> {
        let depth = self.depth + 1;
        if depth > self.config.max_selection_depth {
            return Err(CypherGeneratorError::SelectionTooDeep {
                depth,
                max: self.config.max_selection_depth,
            });
        }
        let variable = variable.into();
        let mut bound = self.bound.clone();
        bound.push(variable.clone());
        Ok(CompilationContext {
            schema: self.schema,
            config: self.config,
            variable,
            object_type,
            depth,
            bound,
        })
    }
}
