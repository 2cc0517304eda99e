use cache_table_reset::Page;
use proptest::collection::vec;
use proptest::prelude::*;

fn value_strategy() -> BoxedStrategy<String> {
    "[a-z0-9]{0,12}".boxed()
}

fn fixture(prefills: &[String], badge_count: usize) -> String {
    let mut inputs = String::new();
    for (idx, prefill) in prefills.iter().enumerate() {
        inputs.push_str(&format!(
            "<input class='form-control' name='f{idx}' value='{prefill}' data-prefill='{prefill}'>"
        ));
    }

    let mut extras = String::new();
    for idx in 0..badge_count {
        let class = if idx % 2 == 0 {
            "badge-success"
        } else {
            "badge-danger"
        };
        extras.push_str(&format!("<span class='{class}'>b{idx}</span>"));
    }
    extras.push_str("<a data-toggle='popover' data-content='hint' data-original-title='t'>?</a>");

    format!(
        r#"
        <div class='c-tbl-block'>
          <table class='cache-table'><tr><td>{inputs}{extras}</td></tr></table>
          <div class='reset-button-container'>
            <button class='reset-button' data-table-uuid='fuzz'>Reset</button>
            <div class='reset-confirm-container' style='display: none;'>
              <button class='reset-confirm'>Confirm</button>
              <button class='reset-cancel'>Cancel</button>
            </div>
          </div>
        </div>
        "#
    )
}

fn observable_state(page: &Page, input_count: usize) -> (Vec<String>, usize, Option<String>) {
    let values = (0..input_count)
        .map(|idx| {
            page.input_value(&format!("input[name='f{idx}']"))
                .expect("input present")
        })
        .collect();
    let badges = page
        .query_count(".badge-success, .badge-danger, .input-group-text")
        .expect("badge query");
    let popover_content = page
        .attr("[data-toggle='popover']", "data-content")
        .expect("popover present");
    (values, badges, popover_content)
}

proptest! {
    #[test]
    fn confirm_restores_every_prefill(
        prefills in vec(value_strategy(), 1..6),
        edits in vec(value_strategy(), 1..6),
        badge_count in 0usize..5,
    ) {
        let html = fixture(&prefills, badge_count);
        let mut page = Page::from_html(&html).expect("page");

        for (idx, edit) in edits.iter().enumerate().take(prefills.len()) {
            page.set_input_value(&format!("input[name='f{idx}']"), edit)
                .expect("edit");
        }

        page.click(".reset-button").expect("activate");
        page.click(".reset-confirm").expect("confirm");

        for (idx, prefill) in prefills.iter().enumerate() {
            let value = page
                .input_value(&format!("input[name='f{idx}']"))
                .expect("input present");
            prop_assert_eq!(&value, prefill);
        }
        prop_assert_eq!(
            page.query_count(".badge-success, .badge-danger").expect("badges"),
            0
        );
    }

    #[test]
    fn restore_twice_equals_restore_once(
        prefills in vec(value_strategy(), 1..6),
        edits in vec(value_strategy(), 1..6),
        badge_count in 0usize..5,
    ) {
        let html = fixture(&prefills, badge_count);
        let mut page = Page::from_html(&html).expect("page");

        for (idx, edit) in edits.iter().enumerate().take(prefills.len()) {
            page.set_input_value(&format!("input[name='f{idx}']"), edit)
                .expect("edit");
        }

        page.click(".reset-button").expect("activate");
        page.click(".reset-confirm").expect("confirm");
        let once = observable_state(&page, prefills.len());

        page.click(".reset-button").expect("activate again");
        page.click(".reset-confirm").expect("confirm again");
        let twice = observable_state(&page, prefills.len());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn cancel_preserves_edits_and_decorations(
        prefills in vec(value_strategy(), 1..6),
        edits in vec(value_strategy(), 1..6),
        badge_count in 1usize..5,
    ) {
        let html = fixture(&prefills, badge_count);
        let mut page = Page::from_html(&html).expect("page");

        for (idx, edit) in edits.iter().enumerate().take(prefills.len()) {
            page.set_input_value(&format!("input[name='f{idx}']"), edit)
                .expect("edit");
        }
        let before = observable_state(&page, prefills.len());

        page.click(".reset-button").expect("activate");
        page.click(".reset-cancel").expect("cancel");
        let after = observable_state(&page, prefills.len());

        prop_assert_eq!(before, after);
    }
}
