//! C# emitters for Animator wrapper classes.
//!
//! [`writer`] is the indentation-aware buffer, [`members`] turns parameters
//! into constants, properties and trigger methods, [`compat`] emits the
//! positional compatibility check and [`class`] assembles the whole file.

pub mod class;
pub mod compat;
pub mod members;
pub mod writer;

pub use class::WrapperGenerator;
pub use writer::CodeWriter;

/// Private field holding the runtime Animator
pub const BACKING_FIELD: &str = "_animator";

/// Property every generated member reads and writes through
pub const BACKING_PROPERTY: &str = "Animator";

/// Runtime component type exposing the state machine
pub const HOST_TYPE: &str = "Animator";

/// Base type of non-partial wrappers
pub const BASE_TYPE: &str = "MonoBehaviour";

/// Name of the generated compatibility check
pub const COMPATIBILITY_METHOD: &str = "IsCompatible";

/// Startup hook running the editor-only compatibility check
pub const STARTUP_HOOK: &str = "Awake";

/// Editor hook wiring the first compatible sibling Animator
pub const AUTO_WIRING_HOOK: &str = "Reset";

/// Suffix of the per-parameter hash constants
pub const CONSTANT_SUFFIX: &str = "Property";
