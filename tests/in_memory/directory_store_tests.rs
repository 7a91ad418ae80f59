//! Integration tests for sessions backed by the directory store.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::board::{
    adapters::{DirectoryKeyValueStore, StorageGateway, StorageKeys},
    domain::TaskDraft,
    ports::PersistenceGateway,
    services::{BoardSession, SeedMode},
};
use tempfile::TempDir;

fn open(root: &Utf8PathBuf, keys: StorageKeys) -> Result<
    BoardSession<StorageGateway<DirectoryKeyValueStore>, DefaultClock>,
    eyre::Report,
> {
    let store = DirectoryKeyValueStore::open(root)?;
    let gateway = StorageGateway::with_keys(Arc::new(store), keys);
    Ok(BoardSession::open(
        Arc::new(gateway),
        Arc::new(DefaultClock),
        SeedMode::Blank,
    ))
}

#[rstest]
fn sessions_reopen_from_disk() -> Result<(), eyre::Report> {
    let temp = TempDir::new()?;
    let root = Utf8PathBuf::try_from(temp.path().join("store"))?;

    let mut first = open(&root, StorageKeys::default())?;
    first.add_task(TaskDraft::new("Persist me"));
    let expected = first.board().clone();

    let second = open(&root, StorageKeys::default())?;

    eyre::ensure!(second.board() == &expected, "board reloaded from disk");
    eyre::ensure!(root.join("kanban-board.json").is_file(), "board file written");
    Ok(())
}

#[rstest]
fn prefixed_sessions_share_a_directory() -> Result<(), eyre::Report> {
    let temp = TempDir::new()?;
    let root = Utf8PathBuf::try_from(temp.path().to_path_buf())?;

    let mut work = open(&root, StorageKeys::with_prefix("work"))?;
    work.add_task(TaskDraft::new("Quarterly report"));
    let home = open(&root, StorageKeys::with_prefix("home"))?;

    eyre::ensure!(home.board().tasks().is_empty(), "home board is separate");
    let gateway = StorageGateway::with_keys(
        Arc::new(DirectoryKeyValueStore::open(&root)?),
        StorageKeys::with_prefix("work"),
    );
    eyre::ensure!(gateway.load_tasks().len() == 1, "work tasks persisted");
    Ok(())
}
