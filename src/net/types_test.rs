use super::*;

// =============================================================
// Post deserialization
// =============================================================

#[test]
fn post_deserializes_nested_survey_action() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "message": "Survey time",
        "props": {
            "attachments": [{
                "actions": [{"id": "a-1", "cookie": "c-1", "default_option": "8"}]
            }]
        }
    }))
    .unwrap();

    assert_eq!(post.id, "p-1");
    assert_eq!(post.message, "Survey time");
    let actions = post.props.unwrap().attachments.unwrap()[0].actions.clone().unwrap();
    let action = &actions[0];
    assert_eq!(action.id, "a-1");
    assert_eq!(action.cookie, "c-1");
    assert_eq!(action.default_option.as_deref(), Some("8"));
}

#[test]
fn post_without_props_deserializes() {
    let post: Post = serde_json::from_value(serde_json::json!({"id": "p-1"})).unwrap();
    assert!(post.props.is_none());
    assert!(post.message.is_empty());
}

#[test]
fn malformed_attachments_degrade_to_none() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "props": {"attachments": "not a list"}
    }))
    .unwrap();
    assert!(post.props.unwrap().attachments.is_none());
}

#[test]
fn null_props_degrade_to_none() {
    let post: Post = serde_json::from_value(serde_json::json!({"id": "p-1", "props": null})).unwrap();
    assert!(post.props.is_none());
}

#[test]
fn malformed_actions_degrade_to_none() {
    let attachment: Attachment = serde_json::from_value(serde_json::json!({"actions": {"id": "x"}})).unwrap();
    assert!(attachment.actions.is_none());
}

#[test]
fn malformed_later_attachment_keeps_first() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "props": {"attachments": [
            {"actions": [{"id": "a", "cookie": "c", "default_option": "8"}]},
            "oops"
        ]}
    }))
    .unwrap();
    let attachments = post.props.unwrap().attachments.unwrap();
    assert_eq!(attachments.len(), 2);
    assert_eq!(attachments[0].actions.as_ref().unwrap()[0].id, "a");
    assert!(attachments[1].actions.is_none());
}

#[test]
fn malformed_first_attachment_keeps_its_position() {
    let props: PostProps = serde_json::from_value(serde_json::json!({
        "attachments": ["oops", {"actions": [{"id": "a", "cookie": "c"}]}]
    }))
    .unwrap();
    let attachments = props.attachments.unwrap();
    assert!(attachments[0].actions.is_none());
    assert_eq!(attachments[1].actions.as_ref().unwrap()[0].id, "a");
}

#[test]
fn odd_sibling_action_keeps_first() {
    let attachment: Attachment = serde_json::from_value(serde_json::json!({
        "actions": [{"id": "a", "cookie": "c", "default_option": "8"}, {"id": 5}, 7]
    }))
    .unwrap();
    let actions = attachment.actions.unwrap();
    assert_eq!(actions.len(), 3);
    assert_eq!(actions[0].id, "a");
    assert_eq!(actions[0].default_option.as_deref(), Some("8"));
    assert_eq!(actions[1].id, "5");
    assert_eq!(actions[2], PostAction::default());
}

#[test]
fn null_cookie_and_numeric_id_are_tolerated() {
    let action: PostAction =
        serde_json::from_value(serde_json::json!({"id": 12, "cookie": null, "default_option": "3"})).unwrap();
    assert_eq!(action.id, "12");
    assert_eq!(action.cookie, "");
    assert_eq!(action.default_option.as_deref(), Some("3"));
}

#[test]
fn null_post_fields_degrade_to_empty() {
    let post: Post = serde_json::from_value(serde_json::json!({"id": null, "message": null})).unwrap();
    assert_eq!(post.id, "");
    assert_eq!(post.message, "");
}

#[test]
fn numeric_default_option_is_stringified() {
    let action: PostAction =
        serde_json::from_value(serde_json::json!({"id": "a", "cookie": "c", "default_option": 7})).unwrap();
    assert_eq!(action.default_option.as_deref(), Some("7"));
}

#[test]
fn non_scalar_default_option_is_ignored() {
    let action: PostAction =
        serde_json::from_value(serde_json::json!({"id": "a", "cookie": "c", "default_option": [1]})).unwrap();
    assert!(action.default_option.is_none());
}

#[test]
fn theme_reads_camel_case_keys() {
    let theme: Theme = serde_json::from_value(serde_json::json!({
        "centerChannelBg": "#ffffff",
        "linkColor": "#2389d7"
    }))
    .unwrap();
    assert_eq!(theme.center_channel_bg.as_deref(), Some("#ffffff"));
    assert_eq!(theme.link_color.as_deref(), Some("#2389d7"));
    assert!(theme.sidebar_bg.is_none());
}

// =============================================================
// FetchResult
// =============================================================

#[test]
fn fetch_result_data_exposes_only_data() {
    let result = FetchResult::Data(serde_json::json!({"ok": true}));
    assert_eq!(result.data(), Some(&serde_json::json!({"ok": true})));
    assert!(result.error().is_none());
    assert!(!result.is_error());
}

#[test]
fn fetch_result_error_exposes_only_error() {
    let result = FetchResult::from(Err(FetchError::Transport("offline".to_owned())));
    assert!(result.data().is_none());
    assert_eq!(result.error(), Some(&FetchError::Transport("offline".to_owned())));
    assert!(result.is_error());
}

#[test]
fn fetch_error_messages_name_the_stage() {
    assert_eq!(FetchError::Parse("eof".to_owned()).to_string(), "response parse failed: eof");
    assert_eq!(FetchError::Transport("dns".to_owned()).to_string(), "request failed: dns");
    assert_eq!(FetchError::Request("TRACE".to_owned()).to_string(), "request build failed: TRACE");
}
