//! bc-model: steady-state performance model of a hybrid biomass plant.
//!
//! A Brayton (gas turbine) topping cycle burns the dry fraction of the
//! feedstock while the moisture fraction feeds a Rankine (steam) bottoming
//! cycle. Empirical AD-HTC correlations estimate
//! byproduct-gas yields from the resulting operating point.
//!
//! The whole model is one pure function, [`evaluate`]: a closed-form
//! mapping from a [`PlantInputs`] record to a [`PlantResults`] record.
//! No I/O, no internal state, no iteration; every division that could
//! degenerate is guarded to 0.0, so the function is total.
//!
//! Stage pipeline:
//!
//! ```text
//! mass split -> brayton -> rankine -> aggregation -> gas yields -> fuel
//! ```
//!
//! Each stage lives in its own module and can be evaluated standalone.

pub mod brayton;
pub mod gas_yield;
pub mod inputs;
pub mod model;
pub mod rankine;
pub mod results;

// Re-exports
pub use inputs::PlantInputs;
pub use model::{MODEL_VERSION, evaluate};
pub use results::PlantResults;
