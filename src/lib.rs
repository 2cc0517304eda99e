//! Reset-to-prefill confirmation widget for cache table blocks.
//!
//! A cache table is a block of `input.form-control` fields whose values were
//! server-rendered from prefill data. This crate models the page-side widget
//! that restores those fields: a reset button that flips into a confirm/cancel
//! row and, on confirmation, writes the construction-time prefill snapshot
//! back into every input while stripping success/error badges, inline
//! decorations, and stale popover annotations.
//!
//! Everything runs against a deterministic in-memory DOM so the widget
//! contract is testable without a browser:
//!
//! ```
//! use cache_table_reset::Page;
//!
//! let mut page = Page::from_html(r#"
//!     <div class='c-tbl-block'>
//!       <table class='cache-table'><tr><td>
//!         <input class='form-control' name='count' value='10' data-prefill='10'>
//!       </td></tr></table>
//!       <div class='reset-button-container'>
//!         <button class='reset-button' data-table-uuid='t1'>Reset</button>
//!         <div class='reset-confirm-container' style='display: none;'>
//!           <button class='reset-confirm'>Confirm</button>
//!           <button class='reset-cancel'>Cancel</button>
//!         </div>
//!       </div>
//!     </div>
//! "#).unwrap();
//!
//! page.set_input_value("input[name='count']", "99").unwrap();
//! page.click(".reset-button").unwrap();
//! page.click(".reset-confirm").unwrap();
//! assert_eq!(page.input_value("input[name='count']").unwrap(), "10");
//! ```

use std::collections::{HashMap, HashSet};

mod diagnostics;
mod dom;
mod html;
mod page;
mod selector;
mod widget;

pub use diagnostics::{
    Diagnostic, DiagnosticLevel, Diagnostics, RecordingDiagnostics, TracingDiagnostics,
};
pub use dom::{Dom, Error, NodeId, Result};
pub use page::Page;
pub use widget::{ResetState, ResetWidget, WidgetOptions};

pub(crate) use selector::{
    SelectorAttrCondition, SelectorCombinator, SelectorPart, SelectorStep, parse_selector_groups,
};
