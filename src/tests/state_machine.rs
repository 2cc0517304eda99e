use super::*;

#[test]
fn reset_activation_swaps_button_for_confirm_row() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>",
        "",
    );
    let mut page = Page::from_html(&html)?;

    assert!(page.is_visible(".reset-button")?);
    assert!(!page.is_visible(".reset-confirm-container")?);
    assert_eq!(page.widget("t1").expect("widget").state(), ResetState::Idle);

    page.click(".reset-button")?;

    assert!(!page.is_visible(".reset-button")?);
    assert!(page.is_visible(".reset-confirm-container")?);
    assert!(page.is_focused(".reset-confirm")?);
    assert_eq!(
        page.widget("t1").expect("widget").state(),
        ResetState::Confirming
    );
    Ok(())
}

#[test]
fn cancel_returns_to_idle_without_touching_data() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>",
        "<span class='badge-success'>ok</span>\
         <span class='input-group-text'>ms</span>\
         <a data-toggle='popover' data-content='hint' data-original-title='Hint'>?</a>",
    );
    let mut page = Page::from_html(&html)?;
    page.set_input_value("input[name='count']", "99")?;

    page.click(".reset-button")?;
    page.click(".reset-cancel")?;

    assert_eq!(page.input_value("input[name='count']")?, "99");
    assert_eq!(page.query_count(".badge-success")?, 1);
    assert_eq!(page.query_count(".input-group-text")?, 1);
    assert_eq!(
        page.attr("[data-toggle='popover']", "data-content")?.as_deref(),
        Some("hint")
    );
    assert!(page.is_visible(".reset-button")?);
    assert!(!page.is_visible(".reset-confirm-container")?);
    assert!(page.is_focused(".reset-button")?);
    assert_eq!(page.widget("t1").expect("widget").state(), ResetState::Idle);
    Ok(())
}

#[test]
fn confirm_is_unreachable_while_idle() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>",
        "",
    );
    let mut page = Page::from_html(&html)?;
    page.set_input_value("input[name='count']", "99")?;

    // The confirm row is hidden in the idle state, so the click is refused
    // and no restore runs.
    assert!(matches!(
        page.click(".reset-confirm"),
        Err(Error::NotVisible(_))
    ));
    assert_eq!(page.input_value("input[name='count']")?, "99");
    Ok(())
}

#[test]
fn transitions_in_the_wrong_state_are_no_ops() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>",
        "",
    );
    let mut page = Page::load(&html)?;
    page.initialize();

    let uuid = {
        let existing = page.widgets().first().expect("widget not constructed");
        assert_eq!(existing.state(), ResetState::Idle);
        existing.uuid().to_string()
    };
    // Rebind a private copy so we can drive it directly against the DOM.
    let mut widget = ResetWidget::bind(
        page.dom_mut(),
        &uuid,
        WidgetOptions::default(),
        &RecordingDiagnostics::new(),
    )?
    .expect("rebind");

    // Cancel and confirm while idle change nothing.
    widget.cancel(page.dom_mut())?;
    widget.confirm(page.dom_mut())?;
    assert_eq!(widget.state(), ResetState::Idle);
    assert!(page.is_visible(".reset-button")?);

    // A second activation while confirming is ignored.
    widget.activate_reset(page.dom_mut())?;
    assert_eq!(widget.state(), ResetState::Confirming);
    widget.activate_reset(page.dom_mut())?;
    assert_eq!(widget.state(), ResetState::Confirming);
    assert!(!page.is_visible(".reset-button")?);
    Ok(())
}

#[test]
fn missing_confirm_row_leaves_reset_button_inert() -> Result<()> {
    let html = r#"
        <div class='c-tbl-block'>
          <table class='cache-table'><tr><td>
            <input class='form-control' name='count' value='10' data-prefill='10'>
          </td></tr></table>
          <div class='reset-button-container'>
            <button class='reset-button' data-table-uuid='t1'>Reset</button>
          </div>
        </div>
        "#;
    let diagnostics = RecordingDiagnostics::new();
    let mut page = Page::load_with_diagnostics(html, Rc::new(diagnostics.clone()))?;
    page.set_measured_width("table.cache-table", 480.0)?;
    page.initialize();

    let widget = page.widget("t1").expect("widget");
    assert!(!widget.is_armed());
    assert_eq!(widget.prefill("count"), Some("10"));
    // Width sync still ran despite the missing confirmation sub-widget.
    assert_eq!(page.style(".reset-button-container", "width")?, "480px");
    assert!(
        diagnostics
            .errors()
            .iter()
            .any(|msg| msg.contains("confirmation elements not found"))
    );

    // Activation does nothing: no state change, button stays visible.
    page.click(".reset-button")?;
    assert!(page.is_visible(".reset-button")?);
    assert_eq!(page.widget("t1").expect("widget").state(), ResetState::Idle);
    Ok(())
}

#[test]
fn confirm_and_cancel_widths_are_equalized_on_activation() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>",
        "",
    );
    let mut page = Page::load(&html)?;
    page.set_measured_width("table.cache-table", 320.0)?;
    page.set_measured_width(".reset-confirm", 96.0)?;
    page.initialize();

    assert_eq!(page.style(".reset-button-container", "width")?, "320px");
    page.click(".reset-button")?;
    assert_eq!(page.style(".reset-cancel", "width")?, "96px");
    Ok(())
}
