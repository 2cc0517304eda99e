use super::*;

#[test]
fn confirm_restores_edited_inputs_to_their_prefills() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>\
         <input class='form-control' name='tag' value='lru' data-prefill='lru'>",
        "",
    );
    let mut page = Page::from_html(&html)?;

    page.set_input_value("input[name='count']", "99")?;
    page.set_input_value("input[name='tag']", "fifo")?;

    page.click(".reset-button")?;
    page.click(".reset-confirm")?;

    assert_eq!(page.input_value("input[name='count']")?, "10");
    assert_eq!(page.input_value("input[name='tag']")?, "lru");
    assert!(page.is_visible(".reset-button")?);
    assert!(!page.is_visible(".reset-confirm-container")?);
    assert!(page.is_focused(".reset-button")?);
    Ok(())
}

#[test]
fn restore_strips_badges_decorations_and_popover_annotations() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>",
        "<span class='badge-success'>correct</span>\
         <span class='badge-danger'>wrong</span>\
         <span class='input-group-text'>ms</span>\
         <a id='pop' data-toggle='popover' data-content='explanation' data-original-title='Why'>?</a>",
    );
    let mut page = Page::from_html(&html)?;

    page.click(".reset-button")?;
    page.click(".reset-confirm")?;

    assert_eq!(page.query_count(".badge-success, .badge-danger")?, 0);
    assert_eq!(page.query_count(".input-group-text")?, 0);
    // The popover trigger keeps its identity but loses its annotations.
    assert!(page.exists("#pop")?);
    assert_eq!(page.attr("#pop", "data-content")?, None);
    assert_eq!(page.attr("#pop", "data-original-title")?, None);
    assert_eq!(page.attr("#pop", "data-toggle")?.as_deref(), Some("popover"));
    Ok(())
}

#[test]
fn input_without_snapshot_entry_is_cleared() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>",
        "",
    );
    let mut page = Page::from_html(&html)?;

    // A field that appears after construction has no snapshot entry.
    {
        let dom = page.dom_mut();
        let cell = dom.query_selector("td")?.expect("cell");
        let mut attrs = HashMap::new();
        attrs.insert("class".to_string(), "form-control".to_string());
        attrs.insert("name".to_string(), "late".to_string());
        attrs.insert("value".to_string(), "scratch".to_string());
        dom.create_element(cell, "input".to_string(), attrs);
    }
    assert_eq!(page.input_value("input[name='late']")?, "scratch");

    page.click(".reset-button")?;
    page.click(".reset-confirm")?;

    assert_eq!(page.input_value("input[name='count']")?, "10");
    assert_eq!(page.input_value("input[name='late']")?, "");
    Ok(())
}

#[test]
fn input_without_name_is_cleared_on_restore() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>\
         <input class='form-control' id='anon' value='stray'>",
        "",
    );
    let mut page = Page::from_html(&html)?;
    page.click(".reset-button")?;
    page.click(".reset-confirm")?;

    assert_eq!(page.input_value("#anon")?, "");
    Ok(())
}

#[test]
fn restore_is_idempotent() -> Result<()> {
    let html = table_block(
        "t1",
        "<input class='form-control' name='count' value='10' data-prefill='10'>",
        "<span class='badge-danger'>wrong</span>\
         <a id='pop' data-toggle='popover' data-content='hint'>?</a>",
    );
    let mut page = Page::from_html(&html)?;
    page.set_input_value("input[name='count']", "4")?;

    page.click(".reset-button")?;
    page.click(".reset-confirm")?;
    let first = (
        page.input_value("input[name='count']")?,
        page.query_count(".badge-success, .badge-danger")?,
        page.query_count(".input-group-text")?,
        page.attr("#pop", "data-content")?,
    );

    page.click(".reset-button")?;
    page.click(".reset-confirm")?;
    let second = (
        page.input_value("input[name='count']")?,
        page.query_count(".badge-success, .badge-danger")?,
        page.query_count(".input-group-text")?,
        page.attr("#pop", "data-content")?,
    );

    assert_eq!(first, second);
    assert_eq!(first.0, "10");
    assert_eq!(first.1, 0);
    Ok(())
}

#[test]
fn two_table_blocks_reset_independently() -> Result<()> {
    let html = format!(
        "{}{}",
        table_block(
            "alpha",
            "<input class='form-control' name='a' value='1' data-prefill='1'>",
            "",
        ),
        table_block(
            "beta",
            "<input class='form-control' name='b' value='2' data-prefill='2'>",
            "",
        ),
    );
    let mut page = Page::from_html(&html)?;
    assert_eq!(page.widgets().len(), 2);

    page.set_input_value("input[name='a']", "11")?;
    page.set_input_value("input[name='b']", "22")?;

    // Reset only the second block: its confirm row becomes the sole visible
    // confirm control, so the class-level click lands there.
    page.click("[data-table-uuid='beta']")?;
    assert_eq!(page.widget("alpha").expect("alpha").state(), ResetState::Idle);
    assert_eq!(
        page.widget("beta").expect("beta").state(),
        ResetState::Confirming
    );
    page.click(".reset-confirm")?;

    assert_eq!(page.input_value("input[name='a']")?, "11");
    assert_eq!(page.input_value("input[name='b']")?, "2");
    Ok(())
}
