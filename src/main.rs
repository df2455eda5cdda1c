use std::io::{self, Write};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use cybercat::kernel::services::adapters::{
    ensure_settings_file, load_settings, AsyncRuntime, CannedAssistant,
};
use cybercat::kernel::{Action, AppState, ChatRole, Store};
use cybercat::models::{FileTree, NodeIcon};

mod logging;

const REPLY_TIMEOUT: Duration = Duration::from_secs(30);

fn icon_glyph(icon: NodeIcon) -> &'static str {
    match icon {
        NodeIcon::Folder => "+",
        NodeIcon::FolderOpen => "-",
        NodeIcon::Code => "*",
        NodeIcon::Text => " ",
    }
}

/// Every dispatch goes through here so no effect is dropped.
fn dispatch(store: &mut Store, runtime: &AsyncRuntime, action: Action) {
    for effect in store.dispatch(action).effects {
        runtime.execute(effect);
    }
}

fn print_tree(out: &mut impl Write, store: &Store) -> io::Result<()> {
    let explorer = &store.state().explorer;
    let active_row = store
        .state()
        .tabs
        .active()
        .and_then(|id| explorer.row_index(id));
    for (index, row) in explorer.rows.iter().enumerate() {
        let marker = if Some(index) == active_row { ">" } else { " " };
        let indent = "  ".repeat(usize::from(row.depth));
        writeln!(out, "{marker}{indent}{} {}", icon_glyph(row.icon), row.name)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    if let Err(e) = ensure_settings_file() {
        eprintln!("settings file unavailable: {e}");
    }
    let settings = load_settings();
    let _logging = logging::init(settings.log_filter.as_deref());

    let mut store = Store::new(AppState::new(
        FileTree::with_demo_content(),
        settings.workspace.clone(),
    ));

    let main_js = store.state().explorer.tree().find_by_path("src/main.js");
    let language = main_js
        .and_then(|id| store.state().explorer.tree().language(id))
        .unwrap_or_default();

    let (tx, rx) = mpsc::channel();
    let assistant = CannedAssistant::new(&settings.assistant).with_language(language);
    let runtime = AsyncRuntime::new(tx, Arc::new(assistant))?;

    if let Some(id) = main_js {
        dispatch(&mut store, &runtime, Action::SelectNode { id });
    }

    let mut out = io::stdout().lock();
    print_tree(&mut out, &store)?;
    if let Some(file) = store.state().active_file() {
        writeln!(out, "\n== {} ({}) ==", file.path, file.language.display_name())?;
        writeln!(out, "{}", file.content)?;
    }

    let prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if prompt.trim().is_empty() {
        return Ok(());
    }

    dispatch(&mut store, &runtime, Action::ChatSubmit { prompt });
    while store.state().chat.is_loading() {
        match rx.recv_timeout(REPLY_TIMEOUT) {
            Ok(msg) => {
                dispatch(&mut store, &runtime, msg.into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "assistant reply not received");
                break;
            }
        }
    }

    writeln!(out)?;
    for message in store.state().chat.messages() {
        let who = match message.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "assistant",
        };
        writeln!(out, "[{who}] {}", message.content)?;
    }
    Ok(())
}
