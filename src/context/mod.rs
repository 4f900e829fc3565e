/*!
The context --- to which a formula is added and within which searches take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness.
A [Context] uses [MinimalPCG32](crate::generic::random::MinimalPCG32), seeded from the [configuration](crate::config::Config), so that a search with a fixed seed is reproducible.

# Example
```rust
# use otter_sls::context::Context;
# use otter_sls::config::Config;
# use otter_sls::reports::Report;
let mut the_context = Context::from_config(Config::default());

let p_q = the_context.clause_from_string("p q").unwrap();
assert!(the_context.add_clause(p_q).is_ok());

let not_p = the_context.clause_from_string("-p").unwrap();
assert!(the_context.add_clause(not_p).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of("p"), Ok(false));
assert_eq!(the_context.value_of("q"), Ok(true));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A search is in progress.
    Searching,

    /// The valuation of the context satisfies the formula.
    Satisfiable,

    /// The most recent search ended without satisfying the formula.
    Exhausted,
}
