use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::object::Object;
use crate::token::Token;

/// A single lexical scope: a flat map of bindings plus a link to the
/// enclosing scope. A chain of these, walked via `enclosing`, is how
/// closures capture and share state with the scope they were defined in.
#[derive(Debug)]
pub struct Environment {
    pub enclosing: Option<Rc<RefCell<Environment>>>,
    pub variables: HashMap<String, Object>,
}

impl Environment {
    pub fn new(enclosing: Option<Rc<RefCell<Environment>>>) -> Self {
        Environment {
            enclosing,
            variables: HashMap::new(),
        }
    }

    pub fn define(&mut self, name: &str, value: Object) {
        self.variables.insert(name.to_string(), value);
    }

    /// Walks `distance` enclosing links up from this environment. Only
    /// called with a distance computed by the resolver, so the chain is
    /// guaranteed to be that long.
    fn ancestor(&self, distance: usize) -> Rc<RefCell<Environment>> {
        let mut environment = self
            .enclosing
            .clone()
            .expect("resolver-computed distance exceeds the environment chain");

        for _ in 1..distance {
            let parent = environment
                .borrow()
                .enclosing
                .clone()
                .expect("resolver-computed distance exceeds the environment chain");
            environment = parent;
        }

        environment
    }

    pub fn assign(&mut self, name: &Token, value: Object) -> Result<(), RuntimeError> {
        if self.variables.contains_key(&name.lexeme) {
            self.variables.insert(name.lexeme.clone(), value);
            return Ok(());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }

    pub fn assign_at(&mut self, distance: usize, name: &Token, value: Object) {
        if distance > 0 {
            self.ancestor(distance)
                .borrow_mut()
                .variables
                .insert(name.lexeme.clone(), value);
        } else {
            self.variables.insert(name.lexeme.clone(), value);
        }
    }

    pub fn get(&self, name: &Token) -> Result<Object, RuntimeError> {
        if let Some(variable) = self.variables.get(&name.lexeme) {
            return Ok(variable.clone());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }

    pub fn get_at(&self, distance: usize, name: &Token) -> Object {
        if distance > 0 {
            self.ancestor(distance)
                .borrow()
                .variables
                .get(&name.lexeme)
                .cloned()
                .expect("resolver-resolved variable missing from its scope")
        } else {
            self.variables
                .get(&name.lexeme)
                .cloned()
                .expect("resolver-resolved variable missing from its scope")
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(None)
    }
}
