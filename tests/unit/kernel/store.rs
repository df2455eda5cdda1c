use super::*;
use crate::kernel::services::ports::WorkspaceConfig;
use crate::kernel::{ChatRole, Effect};
use crate::models::{DuplicateNamePolicy, FileTree, NodeId, NodeKind};

fn new_store() -> Store {
    Store::new(AppState::new(FileTree::new(), WorkspaceConfig::default()))
}

fn create(store: &mut Store, name: &str, kind: NodeKind, parent: Option<&str>) -> NodeId {
    let result = store.dispatch(Action::CreateNode {
        name: name.to_string(),
        kind,
        parent_path: parent.map(str::to_string),
    });
    assert!(result.state_changed);
    let path = match parent {
        Some(parent) => format!("{parent}/{name}"),
        None => name.to_string(),
    };
    store.state().explorer.tree().find_by_path(&path).unwrap()
}

fn open_names(store: &Store) -> Vec<String> {
    store
        .state()
        .open_files()
        .into_iter()
        .map(|file| file.name)
        .collect()
}

fn active_name(store: &Store) -> Option<String> {
    store.state().active_file().map(|file| file.name)
}

#[test]
fn deleting_folder_closes_tabs_of_descendants() {
    let mut store = new_store();
    let src = create(&mut store, "src", NodeKind::Folder, None);
    let a = create(&mut store, "a.py", NodeKind::File, Some("src"));

    let _ = store.dispatch(Action::SelectNode { id: a });
    assert_eq!(open_names(&store), vec!["a.py"]);
    assert_eq!(active_name(&store).as_deref(), Some("a.py"));

    let result = store.dispatch(Action::DeleteNode { id: src });
    assert!(result.state_changed);
    assert!(open_names(&store).is_empty());
    assert_eq!(active_name(&store), None);
    assert!(store.state().explorer.tree().is_empty());
    assert!(store.state().explorer.rows.is_empty());
}

#[test]
fn closing_active_tab_activates_last_remaining() {
    let mut store = new_store();
    let x = create(&mut store, "x.js", NodeKind::File, None);
    let y = create(&mut store, "y.ts", NodeKind::File, None);

    let _ = store.dispatch(Action::SelectNode { id: x });
    let _ = store.dispatch(Action::SelectNode { id: y });
    assert_eq!(open_names(&store), vec!["x.js", "y.ts"]);
    assert_eq!(active_name(&store).as_deref(), Some("y.ts"));

    let result = store.dispatch(Action::CloseTab { id: y });
    assert!(result.state_changed);
    assert_eq!(open_names(&store), vec!["x.js"]);
    assert_eq!(active_name(&store).as_deref(), Some("x.js"));
}

#[test]
fn closing_inactive_tab_keeps_active() {
    let mut store = new_store();
    let x = create(&mut store, "x.js", NodeKind::File, None);
    let y = create(&mut store, "y.ts", NodeKind::File, None);
    let _ = store.dispatch(Action::SelectNode { id: x });
    let _ = store.dispatch(Action::SelectNode { id: y });

    let _ = store.dispatch(Action::CloseTab { id: x });
    assert_eq!(open_names(&store), vec!["y.ts"]);
    assert_eq!(active_name(&store).as_deref(), Some("y.ts"));
}

#[test]
fn selecting_open_file_again_does_not_duplicate_tab() {
    let mut store = new_store();
    let x = create(&mut store, "x.js", NodeKind::File, None);
    let y = create(&mut store, "y.ts", NodeKind::File, None);
    let _ = store.dispatch(Action::SelectNode { id: x });
    let _ = store.dispatch(Action::SelectNode { id: y });

    let result = store.dispatch(Action::SelectNode { id: x });
    assert!(result.state_changed);
    assert_eq!(open_names(&store), vec!["x.js", "y.ts"]);
    assert_eq!(active_name(&store).as_deref(), Some("x.js"));

    let result = store.dispatch(Action::SelectNode { id: x });
    assert!(!result.state_changed);
}

#[test]
fn activate_tab_requires_open_tab() {
    let mut store = new_store();
    let x = create(&mut store, "x.js", NodeKind::File, None);
    let y = create(&mut store, "y.ts", NodeKind::File, None);
    let _ = store.dispatch(Action::SelectNode { id: x });

    assert!(!store.dispatch(Action::ActivateTab { id: y }).state_changed);
    assert_eq!(open_names(&store), vec!["x.js"]);

    let _ = store.dispatch(Action::SelectNode { id: y });
    assert!(store.dispatch(Action::ActivateTab { id: x }).state_changed);
    assert_eq!(active_name(&store).as_deref(), Some("x.js"));
}

#[test]
fn selecting_folder_toggles_it_without_opening_tab() {
    let mut store = new_store();
    let src = create(&mut store, "src", NodeKind::Folder, None);
    let _ = create(&mut store, "a.py", NodeKind::File, Some("src"));
    assert!(store.state().explorer.tree().is_expanded(src));
    assert_eq!(store.state().explorer.rows.len(), 2);

    let result = store.dispatch(Action::SelectNode { id: src });
    assert!(result.state_changed);
    assert!(!store.state().explorer.tree().is_expanded(src));
    assert_eq!(store.state().explorer.rows.len(), 1);
    assert!(store.state().tabs.is_empty());

    let _ = store.dispatch(Action::ToggleFolder { id: src });
    assert!(store.state().explorer.tree().is_expanded(src));
    assert_eq!(store.state().explorer.rows.len(), 2);
}

#[test]
fn unknown_ids_are_noops() {
    let mut store = new_store();
    let x = create(&mut store, "x.js", NodeKind::File, None);
    let _ = store.dispatch(Action::SelectNode { id: x });
    let _ = store.dispatch(Action::DeleteNode { id: x });

    for action in [
        Action::SelectNode { id: x },
        Action::ActivateTab { id: x },
        Action::CloseTab { id: x },
        Action::ToggleFolder { id: x },
        Action::DeleteNode { id: x },
        Action::RenameNode {
            id: x,
            name: "z.js".to_string(),
        },
        Action::UpdateContent {
            id: x,
            content: "let z = 1;".to_string(),
        },
    ] {
        let result = store.dispatch(action);
        assert!(!result.state_changed);
        assert!(result.effects.is_empty());
    }
    assert!(store.state().tabs.is_empty());
}

#[test]
fn create_under_missing_parent_is_rejected() {
    let mut store = new_store();
    let result = store.dispatch(Action::CreateNode {
        name: "a.py".to_string(),
        kind: NodeKind::File,
        parent_path: Some("nope".to_string()),
    });
    assert!(!result.state_changed);
    assert!(store.state().explorer.tree().is_empty());
}

#[test]
fn update_content_is_visible_in_open_files_only_for_target() {
    let mut store = new_store();
    let x = create(&mut store, "x.js", NodeKind::File, None);
    let y = create(&mut store, "y.ts", NodeKind::File, None);
    let _ = store.dispatch(Action::SelectNode { id: x });
    let _ = store.dispatch(Action::SelectNode { id: y });

    let result = store.dispatch(Action::UpdateContent {
        id: x,
        content: "console.log(1);".to_string(),
    });
    assert!(result.state_changed);

    let files = store.state().open_files();
    assert_eq!(files[0].content, "console.log(1);");
    assert_eq!(files[1].content, "");
}

#[test]
fn update_content_on_folder_is_rejected() {
    let mut store = new_store();
    let src = create(&mut store, "src", NodeKind::Folder, None);
    let result = store.dispatch(Action::UpdateContent {
        id: src,
        content: "x".to_string(),
    });
    assert!(!result.state_changed);
}

#[test]
fn rename_updates_open_tab_snapshot() {
    let mut store = new_store();
    let _ = create(&mut store, "src", NodeKind::Folder, None);
    let a = create(&mut store, "a.py", NodeKind::File, Some("src"));
    let _ = store.dispatch(Action::SelectNode { id: a });

    let result = store.dispatch(Action::RenameNode {
        id: a,
        name: "a.rs".to_string(),
    });
    assert!(result.state_changed);

    let active = store.state().active_file().unwrap();
    assert_eq!(active.name, "a.rs");
    assert_eq!(active.path, "src/a.rs");
    assert_eq!(active.language.language_id(), "rust");
}

#[test]
fn reject_policy_from_config_blocks_sibling_duplicates() {
    let config = WorkspaceConfig {
        duplicate_names: DuplicateNamePolicy::Reject,
    };
    let mut store = Store::new(AppState::new(FileTree::new(), config));
    let _ = create(&mut store, "x.js", NodeKind::File, None);

    let result = store.dispatch(Action::CreateNode {
        name: "x.js".to_string(),
        kind: NodeKind::File,
        parent_path: None,
    });
    assert!(!result.state_changed);
    assert_eq!(store.state().explorer.tree().len(), 1);
}

#[test]
fn allow_policy_keeps_duplicates() {
    let mut store = new_store();
    let _ = create(&mut store, "x.js", NodeKind::File, None);
    let result = store.dispatch(Action::CreateNode {
        name: "x.js".to_string(),
        kind: NodeKind::File,
        parent_path: None,
    });
    assert!(result.state_changed);
    assert_eq!(store.state().explorer.rows.len(), 2);
}

#[test]
fn chat_submit_emits_send_prompt() {
    let mut store = new_store();

    let result = store.dispatch(Action::ChatSubmit {
        prompt: "explain this".to_string(),
    });
    assert!(result.state_changed);
    let request_id = match result.effects.as_slice() {
        [Effect::SendPrompt { request_id, prompt }] => {
            assert_eq!(prompt, "explain this");
            *request_id
        }
        other => panic!("unexpected effects: {other:?}"),
    };
    assert!(store.state().chat.is_loading());

    let blocked = store.dispatch(Action::ChatSubmit {
        prompt: "again".to_string(),
    });
    assert!(!blocked.state_changed);
    assert!(blocked.effects.is_empty());

    let result = store.dispatch(Action::AssistantReplied {
        request_id,
        reply: "sure".to_string(),
    });
    assert!(result.state_changed);
    let messages = store.state().chat.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, ChatRole::Assistant);
    assert_eq!(messages[1].content, "sure");
    assert!(!store.state().chat.is_loading());
}

#[test]
fn stale_assistant_reply_is_dropped() {
    let mut store = new_store();
    let result = store.dispatch(Action::AssistantReplied {
        request_id: 42,
        reply: "late".to_string(),
    });
    assert!(!result.state_changed);
    assert!(store.state().chat.messages().is_empty());
}

#[test]
fn demo_content_store_lists_main_js() {
    let store = Store::new(AppState::new(
        FileTree::with_demo_content(),
        WorkspaceConfig::default(),
    ));
    let names: Vec<&str> = store
        .state()
        .explorer
        .rows
        .iter()
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(names, vec!["src", "main.js"]);
}

#[test]
fn deleting_folder_keeps_tabs_outside_the_subtree() {
    let mut store = new_store();
    let src = create(&mut store, "src", NodeKind::Folder, None);
    let a = create(&mut store, "a.py", NodeKind::File, Some("src"));
    let r = create(&mut store, "r.md", NodeKind::File, None);

    let _ = store.dispatch(Action::SelectNode { id: a });
    let _ = store.dispatch(Action::SelectNode { id: r });
    assert_eq!(active_name(&store).as_deref(), Some("r.md"));

    let result = store.dispatch(Action::DeleteNode { id: src });
    assert!(result.state_changed);
    assert_eq!(open_names(&store), vec!["r.md"]);
    assert_eq!(active_name(&store).as_deref(), Some("r.md"));
    assert_eq!(
        store.state().explorer.tree().find_by_path("r.md"),
        Some(r)
    );
}

#[test]
fn row_index_follows_visible_rows() {
    let mut store = new_store();
    let src = create(&mut store, "src", NodeKind::Folder, None);
    let a = create(&mut store, "a.py", NodeKind::File, Some("src"));
    let r = create(&mut store, "r.md", NodeKind::File, None);

    let explorer = &store.state().explorer;
    assert_eq!(explorer.row_index(src), Some(0));
    assert_eq!(explorer.row_index(a), Some(1));
    assert_eq!(explorer.row_index(r), Some(2));

    let _ = store.dispatch(Action::ToggleFolder { id: src });
    let explorer = &store.state().explorer;
    assert_eq!(explorer.row_index(a), None);
    assert_eq!(explorer.row_index(r), Some(1));

    let _ = store.dispatch(Action::DeleteNode { id: r });
    assert_eq!(store.state().explorer.row_index(r), None);
}
