//! Integration tests for the repository layer.
//!
//! Exercises the repositories against a real SQLite file:
//! - Create the full hierarchy (project -> prompt -> node / note)
//! - Ordering of nodes and notes
//! - The one-child-per-parent chain index
//! - Foreign key violations and cascade deletes
//! - Concurrent write transactions

mod common;

use assert_matches::assert_matches;
use prompt_explorer_db::models::note::CreateNote;
use prompt_explorer_db::repositories::{NodeRepo, NoteRepo, ProjectRepo, PromptRepo};
use sqlx::error::ErrorKind;
use sqlx::SqlitePool;
use tokio::task::JoinSet;

use common::{create_chain, new_node, new_project, new_prompt};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn count(pool: &prompt_explorer_db::DbPool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

fn error_kind(err: &sqlx::Error) -> Option<ErrorKind> {
    err.as_database_error().map(|e| e.kind())
}

// ---------------------------------------------------------------------------
// Test: Full hierarchy creation
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_full_hierarchy(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let project = ProjectRepo::create(&pool, &new_project("Hierarchy"))
        .await
        .unwrap();
    assert_eq!(project.name, "Hierarchy");
    assert_eq!(project.main_request, None);

    let prompt = PromptRepo::create(&pool, &new_prompt(project.id, None, "Root"))
        .await
        .unwrap();
    assert_eq!(prompt.project_id, project.id);
    assert_eq!(prompt.parent_prompt_id, None);
    assert_eq!(prompt.description.as_deref(), Some("Root description"));

    let node = NodeRepo::create(&pool, &new_node(prompt.id, "Step"))
        .await
        .unwrap();
    assert_eq!(node.prompt_id, prompt.id);
    assert_eq!(node.action.as_deref(), Some("Step action"));

    let note = NoteRepo::create(
        &pool,
        &CreateNote {
            prompt_id: prompt.id,
            content: "Remember this".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(note.content, "Remember this");

    let fetched = PromptRepo::find_by_id(&pool, prompt.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Root");
    assert!(PromptRepo::exists(&pool, prompt.id).await.unwrap());
    assert!(!PromptRepo::exists(&pool, prompt.id + 100).await.unwrap());
}

#[sqlx::test]
async fn test_default_project_is_oldest(pool: SqlitePool) {
    common::setup_schema(&pool).await;
    assert!(ProjectRepo::find_default(&pool).await.unwrap().is_none());

    let first = ProjectRepo::create(&pool, &new_project("First")).await.unwrap();
    ProjectRepo::create(&pool, &new_project("Second")).await.unwrap();

    let default = ProjectRepo::find_default(&pool).await.unwrap().unwrap();
    assert_eq!(default.id, first.id);
    assert_eq!(ProjectRepo::list(&pool).await.unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: Ordering
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_nodes_listed_in_insertion_order(pool: SqlitePool) {
    common::setup_schema(&pool).await;
    let (_, prompts) = create_chain(&pool, 1).await;
    let prompt_id = prompts[0].id;

    let ids = [
        common::add_node(&pool, prompt_id, "c").await,
        common::add_node(&pool, prompt_id, "a").await,
        common::add_node(&pool, prompt_id, "b").await,
    ];

    let nodes = NodeRepo::list_by_prompt(&pool, prompt_id).await.unwrap();
    let listed: Vec<i64> = nodes.iter().map(|n| n.id).collect();
    assert_eq!(listed, ids);
    let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[sqlx::test]
async fn test_notes_listed_newest_first(pool: SqlitePool) {
    common::setup_schema(&pool).await;
    let (_, prompts) = create_chain(&pool, 1).await;
    let prompt_id = prompts[0].id;

    for content in ["first", "second", "third"] {
        NoteRepo::create(
            &pool,
            &CreateNote {
                prompt_id,
                content: content.to_string(),
            },
        )
        .await
        .unwrap();
    }

    let notes = NoteRepo::list_by_prompt(&pool, prompt_id).await.unwrap();
    let contents: Vec<&str> = notes.iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, ["third", "second", "first"]);
    assert!(notes.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[sqlx::test]
async fn test_links_listed_by_project(pool: SqlitePool) {
    common::setup_schema(&pool).await;
    let (project_id, prompts) = create_chain(&pool, 3).await;
    let (other_project, _) = create_chain(&pool, 2).await;

    let links = PromptRepo::list_links_by_project(&pool, project_id).await.unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0].parent_id, None);
    assert_eq!(links[2].parent_id, Some(prompts[1].id));

    let other = PromptRepo::list_links_by_project(&pool, other_project).await.unwrap();
    assert_eq!(other.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: Chain invariant
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_second_child_violates_chain_index(pool: SqlitePool) {
    common::setup_schema(&pool).await;
    let (project_id, prompts) = create_chain(&pool, 2).await;

    let child = PromptRepo::find_child(&pool, prompts[0].id).await.unwrap().unwrap();
    assert_eq!(child.id, prompts[1].id);
    assert!(PromptRepo::find_child(&pool, prompts[1].id).await.unwrap().is_none());

    let err = PromptRepo::create(&pool, &new_prompt(project_id, Some(prompts[0].id), "Dup"))
        .await
        .unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::UniqueViolation));
    assert_eq!(count(&pool, "prompts").await, 2);
}

#[sqlx::test]
async fn test_multiple_roots_allowed(pool: SqlitePool) {
    common::setup_schema(&pool).await;
    let project = ProjectRepo::create(&pool, &new_project("Roots")).await.unwrap();

    PromptRepo::create(&pool, &new_prompt(project.id, None, "A")).await.unwrap();
    PromptRepo::create(&pool, &new_prompt(project.id, None, "B")).await.unwrap();
    assert_eq!(count(&pool, "prompts").await, 2);
}

// ---------------------------------------------------------------------------
// Test: Foreign keys and cascades
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_node_for_missing_prompt_violates_fk(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let result = NodeRepo::create(&pool, &new_node(999, "Orphan")).await;
    assert_matches!(
        result,
        Err(ref err) if error_kind(err) == Some(ErrorKind::ForeignKeyViolation)
    );
}

#[sqlx::test]
async fn test_prompt_for_missing_project_violates_fk(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let err = PromptRepo::create(&pool, &new_prompt(999, None, "Orphan"))
        .await
        .unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::ForeignKeyViolation));
}

#[sqlx::test]
async fn test_cascade_delete_project(pool: SqlitePool) {
    common::setup_schema(&pool).await;
    let (project_id, prompts) = create_chain(&pool, 2).await;
    common::add_node(&pool, prompts[0].id, "n").await;
    NoteRepo::create(
        &pool,
        &CreateNote {
            prompt_id: prompts[1].id,
            content: "note".to_string(),
        },
    )
    .await
    .unwrap();

    sqlx::query("DELETE FROM projects WHERE id = ?1")
        .bind(project_id)
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(count(&pool, "prompts").await, 0);
    assert_eq!(count(&pool, "nodes").await, 0);
    assert_eq!(count(&pool, "notes").await, 0);
}

#[sqlx::test]
async fn test_delete_parent_detaches_child(pool: SqlitePool) {
    common::setup_schema(&pool).await;
    let (_, prompts) = create_chain(&pool, 2).await;
    common::add_node(&pool, prompts[0].id, "n").await;

    sqlx::query("DELETE FROM prompts WHERE id = ?1")
        .bind(prompts[0].id)
        .execute(&pool)
        .await
        .unwrap();

    let child = PromptRepo::find_by_id(&pool, prompts[1].id).await.unwrap().unwrap();
    assert_eq!(child.parent_prompt_id, None);
    assert_eq!(count(&pool, "nodes").await, 0);
}

// ---------------------------------------------------------------------------
// Test: Concurrent writers
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_concurrent_write_transactions_queue(pool: SqlitePool) {
    common::setup_schema(&pool).await;
    let (_, prompts) = create_chain(&pool, 1).await;
    let prompt_id = prompts[0].id;

    // Each transaction reads before it writes, the pattern that fails with
    // SQLITE_BUSY under a deferred BEGIN.
    let mut tasks = JoinSet::new();
    for i in 0..32 {
        let pool = pool.clone();
        tasks.spawn(async move {
            let mut tx = prompt_explorer_db::begin_write(&pool).await?;
            assert!(PromptRepo::exists(&mut *tx, prompt_id).await?);
            NodeRepo::create(&mut *tx, &new_node(prompt_id, &format!("n{i}"))).await?;
            tx.commit().await
        });
    }
    while let Some(joined) = tasks.join_next().await {
        joined.unwrap().unwrap();
    }

    assert_eq!(count(&pool, "nodes").await, 32);
}
