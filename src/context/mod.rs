//! Presentation context shared across a dashboard session.
//!
//! Theme and application identity are session-wide and live in an explicit
//! [`AppContext`]; the detail level belongs to each table and lives in its
//! [`TableView`](crate::view::TableView).
//!
//! # Modules
//!
//! - [`provider`]: The context object, its events and actions
//! - [`resolve`]: Ordered resolution of initial preferences
//! - [`observe`]: Subscribable values
//! - [`detail`]: Table detail levels

pub mod detail;
pub mod observe;
pub mod provider;
pub mod resolve;

pub use detail::DetailLevel;
pub use observe::{Observable, SubscriptionId};
pub use provider::{Action, AppContext, ContextEvent, ContextSnapshot};
pub use resolve::{
    resolve_theme, stored_preference, NoOsSignal, OsThemeSignal, Resolver, TerminalBackground,
};
