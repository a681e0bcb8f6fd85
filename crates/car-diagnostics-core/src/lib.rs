//! Car Diagnostics Core
//!
//! Rule-based structural validation of a car record. The
//! [`DiagnosticEngine`] checks that the identifying fields are present,
//! that the required part inventory is fully stocked and that every
//! installed part is in working condition. It reports the first failing
//! stage and stops.
//!
//! ## Example
//!
//! ```rust
//! use car_diagnostics_core::{Car, ConditionType, DiagnosticEngine, PartType};
//!
//! let car = Car::new()
//!     .with_year("1998")
//!     .with_make("Volvo")
//!     .with_model("V70")
//!     .with_part(PartType::Engine, ConditionType::Good);
//!
//! let report = DiagnosticEngine::default().run(Some(&car)).unwrap();
//! assert!(!report.is_success());
//! for line in report.lines() {
//!     println!("{}", line);
//! }
//! ```

pub mod car;
pub mod engine;
pub mod error;
pub mod finding;
pub mod inventory;
pub mod part;

pub use car::{Car, RecordField};
pub use engine::{
    DiagnosticEngine, DiagnosticReport, Outcome, Stage, MISSING_FIELDS_PREFIX,
    PARTS_LIST_ABSENT_MESSAGE, RECORD_ABSENT_MESSAGE, SUCCESS_MESSAGE,
};
pub use error::{DiagnosticError, Result};
pub use finding::{report_damaged, report_missing, Finding};
pub use inventory::RequiredInventory;
pub use part::{ConditionType, Part, PartType};
