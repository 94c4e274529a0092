use shared::domain::QuestionKind;
use shared::payload::ResponseValue;

use crate::catalog::ServiceCatalog;
use crate::controller::{ModalFormController, ResponseDraft};
use crate::error::SubmitBlocked;

fn open_controller(slug: &str) -> (ServiceCatalog, ModalFormController) {
    let catalog = ServiceCatalog::builtin();
    let mut controller = ModalFormController::new();
    controller.open(&catalog, slug);
    (catalog, controller)
}

/// Satisfy every required question so submit succeeds.
fn fill_required(controller: &mut ModalFormController) {
    let definition = controller.definition().expect("open form").clone();
    for (index, question) in definition.questions.iter().enumerate() {
        if !question.required {
            continue;
        }
        match question.kind {
            QuestionKind::ShortText | QuestionKind::LongText => {
                *controller.text_mut(index).expect("text draft") = "an answer".to_string();
            }
            QuestionKind::SingleSelect => {
                controller.select(index, &question.options[0].value);
            }
            QuestionKind::MultiSelect => {
                controller.toggle_option(index, 0);
            }
        }
    }
}

#[test]
fn opening_builds_one_draft_per_question_in_catalog_order() {
    let catalog = ServiceCatalog::builtin();
    let mut controller = ModalFormController::new();

    for entry in catalog.entries() {
        controller.open(&catalog, entry.slug);
        assert_eq!(
            controller.question_count(),
            entry.definition.questions.len(),
            "{}",
            entry.slug
        );
        for (draft, question) in controller.drafts().iter().zip(&entry.definition.questions) {
            match question.kind {
                QuestionKind::ShortText | QuestionKind::LongText => {
                    assert_eq!(draft, &ResponseDraft::Text(String::new()));
                }
                QuestionKind::SingleSelect => {
                    assert_eq!(draft, &ResponseDraft::Choice(None));
                }
                QuestionKind::MultiSelect => {
                    assert_eq!(
                        draft,
                        &ResponseDraft::Checks(vec![false; question.options.len()])
                    );
                }
            }
        }
    }
}

#[test]
fn cv_creation_opens_with_five_questions_and_a_five_option_multi_select() {
    let (_, controller) = open_controller("cv-creation");

    assert_eq!(controller.title(), Some("CV Creation Service"));
    assert_eq!(controller.question_count(), 5);
    assert_eq!(controller.drafts()[3], ResponseDraft::Checks(vec![false; 5]));
}

#[test]
fn unknown_service_opens_a_generic_empty_form() {
    let (_, mut controller) = open_controller("xyz");

    assert_eq!(controller.title(), Some("Service Request"));
    assert_eq!(controller.service_slug(), Some("xyz"));
    assert_eq!(controller.question_count(), 0);

    // Still fully functional for the fixed client fields.
    controller.client_info_mut().expect("open form").email = "dana@example.com".to_string();
    let payload = controller.submit().expect("no questions to block on");
    assert_eq!(payload.service, "xyz");
    assert!(payload.responses.is_empty());
    assert_eq!(payload.client_info.email.as_deref(), Some("dana@example.com"));
}

#[test]
fn toggling_one_option_leaves_the_others_alone() {
    let (_, mut controller) = open_controller("cv-creation");

    controller.toggle_option(3, 1);
    controller.toggle_option(3, 4);
    assert_eq!(
        controller.drafts()[3],
        ResponseDraft::Checks(vec![false, true, false, false, true])
    );

    controller.toggle_option(3, 1);
    assert_eq!(
        controller.drafts()[3],
        ResponseDraft::Checks(vec![false, false, false, false, true])
    );
}

#[test]
fn reopening_replaces_the_previous_services_drafts() {
    let (catalog, mut controller) = open_controller("cv-creation");
    *controller.text_mut(4).expect("textarea draft") = "shipped a product".to_string();

    // Re-entrant open acts as close-then-open.
    controller.open(&catalog, "cover-letters");
    assert_eq!(controller.title(), Some("Cover Letter Writing Service"));
    assert_eq!(controller.question_count(), 6);
    assert!(controller
        .drafts()
        .iter()
        .all(|draft| match draft {
            ResponseDraft::Text(buffer) => buffer.is_empty(),
            ResponseDraft::Choice(choice) => choice.is_none(),
            ResponseDraft::Checks(checks) => checks.iter().all(|checked| !checked),
        }));

    controller.close();
    controller.open(&catalog, "cv-creation");
    assert_eq!(controller.drafts()[4], ResponseDraft::Text(String::new()));
}

#[test]
fn close_discards_state_and_is_a_noop_when_already_closed() {
    let (_, mut controller) = open_controller("cv-creation");
    controller.close();

    assert!(!controller.is_open());
    assert_eq!(controller.question_count(), 0);
    assert_eq!(controller.submit(), Err(SubmitBlocked::NotOpen));

    controller.close();
    assert!(!controller.is_open());
}

#[test]
fn submit_produces_one_response_per_question() {
    let (_, mut controller) = open_controller("cv-creation");
    fill_required(&mut controller);

    let payload = controller.submit().expect("all required answered");
    assert_eq!(payload.responses.len(), 5);
    for (index, value) in &payload.responses {
        match index {
            3 => assert!(matches!(value, ResponseValue::Selections(_))),
            _ => assert!(matches!(value, ResponseValue::Text(_))),
        }
    }
    // Untouched multi-select stays an empty set, not a missing key.
    assert_eq!(payload.responses[&3], ResponseValue::Selections(Vec::new()));
    assert!(!controller.is_open());
}

#[test]
fn checked_options_arrive_in_definition_order() {
    let (_, mut controller) = open_controller("cv-creation");
    fill_required(&mut controller);

    // Check "portfolio" before "creative"; definition order must win.
    controller.toggle_option(3, 4);
    controller.toggle_option(3, 1);

    let payload = controller.submit().expect("all required answered");
    assert_eq!(
        payload.responses[&3],
        ResponseValue::Selections(vec!["creative".to_string(), "portfolio".to_string()])
    );
}

#[test]
fn unmet_required_select_blocks_submission_and_keeps_the_modal_open() {
    let (_, mut controller) = open_controller("cv-creation");
    fill_required(&mut controller);
    controller.select(0, ""); // back to the placeholder

    let blocked = controller.submit().expect_err("required select unset");
    assert!(matches!(
        blocked,
        SubmitBlocked::MissingRequired { index: 0, .. }
    ));
    assert!(controller.is_open());

    // Fixing the field lets the same form go through.
    controller.select(0, "tech");
    controller.submit().expect("now complete");
}

#[test]
fn whitespace_does_not_satisfy_a_required_text_question() {
    let (_, mut controller) = open_controller("cv-creation");
    fill_required(&mut controller);
    *controller.text_mut(4).expect("textarea draft") = "   ".to_string();

    let blocked = controller.submit().expect_err("blank textarea");
    assert_eq!(
        blocked,
        SubmitBlocked::MissingRequired {
            index: 4,
            prompt: "Tell us about your key achievements or experiences".to_string(),
        }
    );
}

#[test]
fn short_text_is_trimmed_and_client_blanks_become_unset() {
    let (_, mut controller) = open_controller("cover-letters");
    fill_required(&mut controller);
    *controller.text_mut(2).expect("job title draft") = "  Staff Engineer  ".to_string();

    {
        let client = controller.client_info_mut().expect("open form");
        client.name = "  Dana  ".to_string();
        client.budget = "   ".to_string();
    }

    let payload = controller.submit().expect("all required answered");
    assert_eq!(
        payload.responses[&2],
        ResponseValue::Text("Staff Engineer".to_string())
    );
    assert_eq!(payload.client_info.name.as_deref(), Some("Dana"));
    assert!(payload.client_info.budget.is_none());
}
