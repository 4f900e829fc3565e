/*!
General callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.

```rust
# use std::{cell::RefCell, rc::Rc};
# use otter_sls::config::{Algorithm, Config};
# use otter_sls::context::Context;
# use otter_sls::reports::Report;
let mut config = Config::default();
config.algorithm.value = Algorithm::GSAT;
let mut ctx = Context::from_config(config);

let clause = ctx.clause_from_string("p q r").unwrap();
ctx.add_clause(clause).unwrap();

let flips = Rc::new(RefCell::new(Vec::default()));
let flips_clone = flips.clone();
ctx.set_callback_step(Box::new(move |step| flips_clone.borrow_mut().push(step.atom)));

assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
assert!(flips.borrow().len() <= 1);
```
*/

use super::GenericContext;
use crate::reports::Step;

/// Called after each flip.
pub type CallbackOnStep = dyn FnMut(&Step);

/// Called before each flip, and stops the search if true.
pub type CallbackTerminate = dyn FnMut() -> bool;

impl<R: rand::Rng> GenericContext<R> {
    pub fn set_callback_step(&mut self, callback: Box<CallbackOnStep>) {
        self.callback_step = Some(callback);
    }

    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    pub(crate) fn call_callback_step(&mut self, step: &Step) {
        if let Some(callback) = &mut self.callback_step {
            callback(step)
        }
    }
}
