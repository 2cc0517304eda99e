use super::*;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use std::rc::Rc;

const MARKER_SELECTOR: &str = ".reset-button[data-table-uuid]";

/// Owns the document and the per-table reset widgets discovered in it.
///
/// Interaction is modeled as explicit clicks routed by marker class; hidden
/// elements refuse clicks, which is what serializes the confirmation state
/// machine exactly as the rendered page does.
pub struct Page {
    dom: Dom,
    widgets: Vec<ResetWidget>,
    diagnostics: Rc<dyn Diagnostics>,
}

impl Page {
    /// Parses the document and immediately runs widget discovery, the
    /// page-ready path.
    pub fn from_html(html: &str) -> Result<Page> {
        Self::from_html_with_diagnostics(html, Rc::new(TracingDiagnostics))
    }

    pub fn from_html_with_diagnostics(
        html: &str,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Result<Page> {
        let mut page = Self::load_with_diagnostics(html, diagnostics)?;
        page.initialize();
        Ok(page)
    }

    /// Parses the document without running discovery, so the host can inject
    /// measured widths first. Follow with [`Page::initialize`].
    pub fn load(html: &str) -> Result<Page> {
        Self::load_with_diagnostics(html, Rc::new(TracingDiagnostics))
    }

    pub fn load_with_diagnostics(html: &str, diagnostics: Rc<dyn Diagnostics>) -> Result<Page> {
        let dom = html::parse_html(html)?;
        Ok(Page {
            dom,
            widgets: Vec::new(),
            diagnostics,
        })
    }

    /// One-shot discovery pass: one widget per reset-button marker, each
    /// construction isolated so a broken table never blocks the rest.
    pub fn initialize(&mut self) {
        let markers = match self.dom.query_selector_all(MARKER_SELECTOR) {
            Ok(markers) => markers,
            Err(err) => {
                self.diagnostics
                    .error(&format!("reset button discovery failed: {err}"));
                return;
            }
        };

        let uuids: Vec<String> = markers
            .iter()
            .filter_map(|marker| self.dom.attr(*marker, "data-table-uuid"))
            .collect();
        self.diagnostics
            .info(&format!("available reset buttons: [{}]", uuids.join(", ")));

        if uuids.is_empty() {
            self.diagnostics.error("no reset buttons found on the page");
        }

        for uuid in uuids {
            self.diagnostics
                .info(&format!("initializing reset widget for uuid: {uuid}"));
            match ResetWidget::bind(
                &mut self.dom,
                &uuid,
                WidgetOptions::default(),
                self.diagnostics.as_ref(),
            ) {
                Ok(Some(widget)) => self.widgets.push(widget),
                Ok(None) => {}
                Err(err) => {
                    self.diagnostics
                        .error(&format!("error initializing reset widget: {err}"));
                }
            }
        }
    }

    pub fn widgets(&self) -> &[ResetWidget] {
        &self.widgets
    }

    pub fn widget(&self, uuid: &str) -> Option<&ResetWidget> {
        self.widgets.iter().find(|widget| widget.uuid() == uuid)
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// Clicks the first visible element matching `selector` and routes it to
    /// the owning widget's handler. Hidden elements are not clickable, which
    /// is what keeps confirm unreachable from the idle state.
    pub fn click(&mut self, selector: &str) -> Result<()> {
        let matches = self.dom.query_selector_all(selector)?;
        if matches.is_empty() {
            return Err(Error::SelectorNotFound(selector.into()));
        }
        let Some(node) = matches
            .into_iter()
            .find(|candidate| self.dom.is_visible(*candidate))
        else {
            return Err(Error::NotVisible(selector.into()));
        };

        let Page { dom, widgets, .. } = self;
        for widget in widgets.iter_mut() {
            if node == widget.reset_button() {
                return widget.activate_reset(dom);
            }
            if widget.confirm_button() == Some(node) {
                return widget.confirm(dom);
            }
            if widget.cancel_button() == Some(node) {
                return widget.cancel(dom);
            }
        }

        // Clicks on elements no widget owns fall through, like any other
        // unwired page content.
        Ok(())
    }

    pub fn input_value(&self, selector: &str) -> Result<String> {
        let node = self.require(selector)?;
        self.dom.value(node)
    }

    /// Models a user edit of a form control.
    pub fn set_input_value(&mut self, selector: &str, value: &str) -> Result<()> {
        let node = self.require(selector)?;
        self.dom.set_value(node, value)
    }

    pub fn attr(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let node = self.require(selector)?;
        Ok(self.dom.attr(node, name))
    }

    pub fn style(&self, selector: &str, property: &str) -> Result<String> {
        let node = self.require(selector)?;
        self.dom.style_get(node, property)
    }

    pub fn is_visible(&self, selector: &str) -> Result<bool> {
        let node = self.require(selector)?;
        Ok(self.dom.is_visible(node))
    }

    pub fn is_focused(&self, selector: &str) -> Result<bool> {
        let node = self.require(selector)?;
        Ok(self.dom.active_element() == Some(node))
    }

    pub fn query_count(&self, selector: &str) -> Result<usize> {
        Ok(self.dom.query_selector_all(selector)?.len())
    }

    pub fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.dom.query_selector(selector)?.is_some())
    }

    /// Injects the rendered width for the first element matching `selector`.
    pub fn set_measured_width(&mut self, selector: &str, width: f64) -> Result<()> {
        let node = self.require(selector)?;
        self.dom.set_measured_width(node, width);
        Ok(())
    }

    fn require(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.into()))
    }
}
