//! The full tool → request map: every tool, its method, path and body

mod common;

use std::collections::HashSet;

use axum::http::{Method, StatusCode};
use common::{text_of, Canned, MockBackend};
use fizzy_mcp::TOOL_NAMES;
use serde_json::{json, Value};

struct Case {
    tool: &'static str,
    args: Value,
    method: Method,
    /// Path (and query) as the backend receives it
    target: String,
    /// Expected JSON body; `None` means no body at all
    body: Option<Value>,
}

fn case(tool: &'static str, args: Value, method: Method, path: &str, body: Option<Value>) -> Case {
    let target = if path.starts_with("/my/") {
        path.to_string()
    } else {
        MockBackend::account_path(path)
    };
    Case {
        tool,
        args,
        method,
        target,
        body,
    }
}

fn cases() -> Vec<Case> {
    use Method as M;

    let card = || json!({ "card_number": 4 });
    let column = || json!({ "board_id": "b1", "column_id": "c1" });
    let comment = || json!({ "card_number": 4, "comment_id": "cm1" });
    let step = || json!({ "card_number": 4, "step_id": "s1" });
    let notification = || json!({ "notification_id": "n1" });

    vec![
        case("fizzy_get_identity", json!({}), M::GET, "/my/identity", None),
        // Boards
        case("fizzy_list_boards", json!({}), M::GET, "/boards", None),
        case("fizzy_get_board", json!({ "board_id": "b1" }), M::GET, "/boards/b1", None),
        case(
            "fizzy_create_board",
            json!({ "name": "Roadmap", "all_access": false }),
            M::POST,
            "/boards",
            Some(json!({ "board": { "name": "Roadmap", "all_access": false } })),
        ),
        case(
            "fizzy_update_board",
            json!({ "board_id": "b1", "name": "Roadmap 2026" }),
            M::PUT,
            "/boards/b1",
            Some(json!({ "board": { "name": "Roadmap 2026" } })),
        ),
        case("fizzy_delete_board", json!({ "board_id": "b1" }), M::DELETE, "/boards/b1", None),
        // Cards
        case(
            "fizzy_list_cards",
            json!({ "board_ids": "b1", "sorted_by": "oldest", "terms": ["login bug"] }),
            M::GET,
            "/cards?board_ids[]=b1&sorted_by=oldest&terms[]=login+bug",
            None,
        ),
        case("fizzy_get_card", card(), M::GET, "/cards/4", None),
        case(
            "fizzy_create_card",
            json!({
                "board_id": "b1",
                "title": "Fix login",
                "description": "<p>Broken on Safari</p>",
                "status": "drafted"
            }),
            M::POST,
            "/boards/b1/cards",
            Some(json!({ "card": {
                "title": "Fix login",
                "description": "<p>Broken on Safari</p>",
                "status": "drafted"
            } })),
        ),
        case(
            "fizzy_update_card",
            json!({ "card_number": "4", "title": "Fix login (Safari)", "tag_ids": ["t1", "t2"] }),
            M::PUT,
            "/cards/4",
            Some(json!({ "card": { "title": "Fix login (Safari)", "tag_ids": ["t1", "t2"] } })),
        ),
        case("fizzy_delete_card", card(), M::DELETE, "/cards/4", None),
        case("fizzy_close_card", card(), M::POST, "/cards/4/closure", None),
        case("fizzy_reopen_card", card(), M::DELETE, "/cards/4/closure", None),
        case("fizzy_move_to_not_now", card(), M::POST, "/cards/4/not_now", None),
        case(
            "fizzy_triage_card",
            json!({ "card_number": 4, "column_id": "c1" }),
            M::POST,
            "/cards/4/triage",
            Some(json!({ "column_id": "c1" })),
        ),
        case("fizzy_send_to_triage", card(), M::DELETE, "/cards/4/triage", None),
        case(
            "fizzy_toggle_assignment",
            json!({ "card_number": 4, "assignee_id": "u1" }),
            M::POST,
            "/cards/4/assignments",
            Some(json!({ "assignee_id": "u1" })),
        ),
        case(
            "fizzy_toggle_tag",
            json!({ "card_number": 4, "tag_title": "bug" }),
            M::POST,
            "/cards/4/taggings",
            Some(json!({ "tag_title": "bug" })),
        ),
        // Columns
        case("fizzy_list_columns", json!({ "board_id": "b1" }), M::GET, "/boards/b1/columns", None),
        case("fizzy_get_column", column(), M::GET, "/boards/b1/columns/c1", None),
        case(
            "fizzy_create_column",
            json!({ "board_id": "b1", "name": "Doing", "color": "lime" }),
            M::POST,
            "/boards/b1/columns",
            Some(json!({ "column": { "name": "Doing", "color": "var(--color-card-4)" } })),
        ),
        case(
            "fizzy_update_column",
            json!({ "board_id": "b1", "column_id": "c1", "name": "Done" }),
            M::PUT,
            "/boards/b1/columns/c1",
            Some(json!({ "column": { "name": "Done" } })),
        ),
        case("fizzy_delete_column", column(), M::DELETE, "/boards/b1/columns/c1", None),
        // Comments
        case("fizzy_list_comments", card(), M::GET, "/cards/4/comments", None),
        case("fizzy_get_comment", comment(), M::GET, "/cards/4/comments/cm1", None),
        case(
            "fizzy_create_comment",
            json!({ "card_number": 4, "body": "Looks good" }),
            M::POST,
            "/cards/4/comments",
            Some(json!({ "comment": { "body": "Looks good" } })),
        ),
        case(
            "fizzy_update_comment",
            json!({ "card_number": 4, "comment_id": "cm1", "body": "Looks great" }),
            M::PUT,
            "/cards/4/comments/cm1",
            Some(json!({ "comment": { "body": "Looks great" } })),
        ),
        case("fizzy_delete_comment", comment(), M::DELETE, "/cards/4/comments/cm1", None),
        // Steps
        case("fizzy_get_step", step(), M::GET, "/cards/4/steps/s1", None),
        case(
            "fizzy_create_step",
            json!({ "card_number": 4, "content": "Write test", "completed": false }),
            M::POST,
            "/cards/4/steps",
            Some(json!({ "step": { "content": "Write test", "completed": false } })),
        ),
        case(
            "fizzy_update_step",
            json!({ "card_number": 4, "step_id": "s1", "content": "Write tests" }),
            M::PUT,
            "/cards/4/steps/s1",
            Some(json!({ "step": { "content": "Write tests" } })),
        ),
        case("fizzy_delete_step", step(), M::DELETE, "/cards/4/steps/s1", None),
        // Tags & users
        case("fizzy_list_tags", json!({}), M::GET, "/tags", None),
        case("fizzy_list_users", json!({}), M::GET, "/users", None),
        case("fizzy_get_user", json!({ "user_id": "u1" }), M::GET, "/users/u1", None),
        // Notifications
        case("fizzy_list_notifications", json!({}), M::GET, "/notifications", None),
        case(
            "fizzy_mark_notification_read",
            notification(),
            M::POST,
            "/notifications/n1/reading",
            None,
        ),
        case(
            "fizzy_mark_notification_unread",
            notification(),
            M::DELETE,
            "/notifications/n1/reading",
            None,
        ),
        case(
            "fizzy_mark_all_notifications_read",
            json!({}),
            M::POST,
            "/notifications/bulk_reading",
            None,
        ),
    ]
}

#[test]
fn test_every_tool_has_a_case() {
    let covered: HashSet<&str> = cases().iter().map(|c| c.tool).collect();
    let registered: HashSet<&str> = TOOL_NAMES.iter().copied().collect();
    assert_eq!(covered, registered);
    assert_eq!(cases().len(), TOOL_NAMES.len());
}

#[tokio::test]
async fn test_each_tool_issues_its_request() {
    for case in cases() {
        let canned = if case.method == Method::GET {
            Canned::json(StatusCode::OK, json!({ "id": "x1" }))
        } else {
            Canned::empty(StatusCode::NO_CONTENT)
        };
        let backend = MockBackend::start(canned).await;

        let result = backend.server().handle_call(case.tool, case.args).await;
        assert_eq!(
            result.is_error,
            Some(false),
            "{}: {}",
            case.tool,
            text_of(&result)
        );

        let request = backend.only_request();
        let target = match &request.query {
            Some(query) => format!("{}?{}", request.path, query),
            None => request.path.clone(),
        };
        assert_eq!(request.method, case.method, "{}", case.tool);
        assert_eq!(target, case.target, "{}", case.tool);

        match &case.body {
            Some(body) => assert_eq!(&request.json(), body, "{}", case.tool),
            None => assert!(request.body.is_empty(), "{}: unexpected body", case.tool),
        }

        if case.method == Method::GET {
            let returned: Value = serde_json::from_str(&text_of(&result)).unwrap();
            assert_eq!(returned, json!({ "id": "x1" }), "{}", case.tool);
        } else {
            assert_eq!(text_of(&result), "null", "{}", case.tool);
        }
    }
}
