use super::*;
use crate::diagnostics::Diagnostics;

// DOM contract markers. The server renders one `.c-tbl-block` per cache
// table; the reset button inside it carries the table's uuid.
const CONTAINER_SELECTOR: &str = ".c-tbl-block";
const FORM_CONTROL_SELECTOR: &str = "input.form-control";
const RESET_BUTTON_SELECTOR: &str = ".reset-button";
const CONFIRM_CONTAINER_SELECTOR: &str = ".reset-confirm-container";
const CONFIRM_SELECTOR: &str = ".reset-confirm";
const CANCEL_SELECTOR: &str = ".reset-cancel";
const TABLE_SELECTOR: &str = "table.cache-table";
const BUTTON_CONTAINER_SELECTOR: &str = ".reset-button-container";
const BADGE_SELECTOR: &str = ".badge-success, .badge-danger";
const DECORATION_SELECTOR: &str = ".input-group-text";
const POPOVER_SELECTOR: &str = "[data-toggle=\"popover\"]";
const MARKER_ATTR: &str = "data-table-uuid";
const MARKER_ATTR_SELECTOR: &str = "[data-table-uuid]";
const PREFILL_ATTR: &str = "data-prefill";

/// Reserved configuration for [`ResetWidget::bind`]. No options are
/// recognized yet; the field exists so the construction signature matches the
/// page contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetOptions {}

/// Confirmation state. Transitions cycle `Idle -> Confirming -> Idle` for the
/// lifetime of the page; visibility and focus flips are side effects of the
/// transition handlers, never the state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetState {
    Idle,
    Confirming,
}

/// One reset widget, bound to a single table block.
///
/// The prefill snapshot is captured at bind time, before any wiring, and is
/// the sole source of truth for restore. Input names must be unique within a
/// container: duplicates silently keep a single snapshot entry.
#[derive(Debug)]
pub struct ResetWidget {
    uuid: String,
    container: NodeId,
    reset_button: NodeId,
    confirm_container: Option<NodeId>,
    confirm_button: Option<NodeId>,
    cancel_button: Option<NodeId>,
    original_prefills: HashMap<String, String>,
    state: ResetState,
    // False when the confirm trio was incomplete at bind time; the reset
    // button then stays visible but inert.
    armed: bool,
}

impl ResetWidget {
    /// Binds a widget to the table block containing the element whose
    /// `data-table-uuid` equals `uuid`.
    ///
    /// Resolution failures (no container, no reset button) are reported via
    /// `diagnostics` and yield `Ok(None)`; each later setup step degrades
    /// independently. `Err` is reserved for selector-level misuse.
    pub fn bind(
        dom: &mut Dom,
        uuid: &str,
        _options: WidgetOptions,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Option<ResetWidget>> {
        // The uuid is matched by value, not spliced into a selector: uuids
        // are caller data and may contain selector metacharacters.
        let marker = dom
            .query_selector_all(MARKER_ATTR_SELECTOR)?
            .into_iter()
            .find(|node| dom.attr(*node, MARKER_ATTR).as_deref() == Some(uuid));
        let container = match marker {
            Some(node) => dom.closest(node, CONTAINER_SELECTOR)?,
            None => None,
        };
        let Some(container) = container else {
            diagnostics.error(&format!("cache table block not found for uuid: {uuid}"));
            return Ok(None);
        };

        // Snapshot before any wiring so it reflects server-rendered prefills.
        let mut original_prefills = HashMap::new();
        for input in dom.query_selector_all_from(container, FORM_CONTROL_SELECTOR)? {
            let Some(name) = dom.attr(input, "name") else {
                continue;
            };
            let prefill = dom.attr(input, PREFILL_ATTR).unwrap_or_default();
            original_prefills.insert(name, prefill);
        }

        let Some(reset_button) = dom.query_selector_from(container, RESET_BUTTON_SELECTOR)? else {
            diagnostics.error(&format!("reset button not found for uuid: {uuid}"));
            return Ok(None);
        };

        let confirm_container = dom.query_selector_from(container, CONFIRM_CONTAINER_SELECTOR)?;
        let confirm_button = dom.query_selector_from(container, CONFIRM_SELECTOR)?;
        let cancel_button = dom.query_selector_from(container, CANCEL_SELECTOR)?;
        let armed =
            confirm_container.is_some() && confirm_button.is_some() && cancel_button.is_some();
        if !armed {
            diagnostics.error(&format!(
                "reset confirmation elements not found for uuid: {uuid}"
            ));
        }

        // Cosmetic: action buttons never exceed the table's rendered width.
        let table = dom.query_selector_from(container, TABLE_SELECTOR)?;
        let button_container = dom.query_selector_from(container, BUTTON_CONTAINER_SELECTOR)?;
        if let (Some(table), Some(button_container)) = (table, button_container) {
            let width = dom.measured_width(table);
            dom.style_set(button_container, "width", &format!("{width}px"))?;
        }

        Ok(Some(ResetWidget {
            uuid: uuid.to_string(),
            container,
            reset_button,
            confirm_container,
            confirm_button,
            cancel_button,
            original_prefills,
            state: ResetState::Idle,
            armed,
        }))
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn state(&self) -> ResetState {
        self.state
    }

    /// False when the confirmation sub-widget was missing at bind time.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn reset_button(&self) -> NodeId {
        self.reset_button
    }

    pub fn confirm_button(&self) -> Option<NodeId> {
        self.confirm_button
    }

    pub fn cancel_button(&self) -> Option<NodeId> {
        self.cancel_button
    }

    pub fn prefill(&self, name: &str) -> Option<&str> {
        self.original_prefills.get(name).map(String::as_str)
    }

    /// `Idle -> Confirming`: swap the reset button for the confirm row,
    /// equalize the confirm/cancel widths, and focus the confirm control.
    /// A no-op when unarmed or already confirming.
    pub fn activate_reset(&mut self, dom: &mut Dom) -> Result<()> {
        if !self.armed || self.state != ResetState::Idle {
            return Ok(());
        }
        let (Some(confirm_container), Some(confirm_button), Some(cancel_button)) =
            (self.confirm_container, self.confirm_button, self.cancel_button)
        else {
            return Ok(());
        };

        dom.style_set(self.reset_button, "display", "none")?;
        dom.style_set(confirm_container, "display", "block")?;
        let confirm_width = dom.measured_width(confirm_button);
        dom.style_set(cancel_button, "width", &format!("{confirm_width}px"))?;
        dom.focus(confirm_button)?;
        self.state = ResetState::Confirming;
        Ok(())
    }

    /// `Confirming -> Idle` via confirm: flip visibility back, refocus the
    /// reset button, then restore the snapshot.
    pub fn confirm(&mut self, dom: &mut Dom) -> Result<()> {
        if self.state != ResetState::Confirming {
            return Ok(());
        }
        self.leave_confirming(dom)?;
        self.restore(dom)
    }

    /// `Confirming -> Idle` via cancel: visibility and focus only, no data
    /// changes.
    pub fn cancel(&mut self, dom: &mut Dom) -> Result<()> {
        if self.state != ResetState::Confirming {
            return Ok(());
        }
        self.leave_confirming(dom)
    }

    fn leave_confirming(&mut self, dom: &mut Dom) -> Result<()> {
        if let Some(confirm_container) = self.confirm_container {
            dom.style_set(confirm_container, "display", "none")?;
        }
        dom.style_set(self.reset_button, "display", "block")?;
        dom.focus(self.reset_button)?;
        self.state = ResetState::Idle;
        Ok(())
    }

    /// Writes the snapshot back into every form control and strips the
    /// decorations user interaction accumulated. Idempotent: the snapshot is
    /// immutable and every removal is a no-op the second time around.
    pub fn restore(&self, dom: &mut Dom) -> Result<()> {
        for input in dom.query_selector_all_from(self.container, FORM_CONTROL_SELECTOR)? {
            let value = dom
                .attr(input, "name")
                .and_then(|name| self.original_prefills.get(&name).cloned())
                .unwrap_or_default();
            dom.set_value(input, &value)?;
        }

        for badge in dom.query_selector_all_from(self.container, BADGE_SELECTOR)? {
            dom.remove_node(badge)?;
        }

        for decoration in dom.query_selector_all_from(self.container, DECORATION_SELECTOR)? {
            dom.remove_node(decoration)?;
        }

        // Popover triggers stay in place; only their stale annotation
        // attributes are cleared.
        for popover in dom.query_selector_all_from(self.container, POPOVER_SELECTOR)? {
            dom.remove_attr(popover, "data-content")?;
            dom.remove_attr(popover, "data-original-title")?;
        }

        Ok(())
    }
}
