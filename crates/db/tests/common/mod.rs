#![allow(dead_code)]

use prompt_explorer_db::models::node::CreateNode;
use prompt_explorer_db::models::project::CreateProject;
use prompt_explorer_db::models::prompt::{CreatePrompt, Prompt};
use prompt_explorer_db::repositories::{NodeRepo, ProjectRepo, PromptRepo};
use prompt_explorer_db::{schema, DbPool};

/// Create the schema in the empty database handed out by `#[sqlx::test]`.
pub async fn setup_schema(pool: &DbPool) {
    schema::reset_and_create_schema(pool).await.unwrap();
}

pub fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        main_request: None,
        final_integration: None,
    }
}

pub fn new_prompt(project_id: i64, parent_prompt_id: Option<i64>, title: &str) -> CreatePrompt {
    CreatePrompt {
        project_id,
        parent_prompt_id,
        title: title.to_string(),
        description: Some(format!("{title} description")),
    }
}

pub fn new_node(prompt_id: i64, name: &str) -> CreateNode {
    CreateNode {
        prompt_id,
        name: name.to_string(),
        action: Some(format!("{name} action")),
    }
}

/// Create a project with a chain of `len` prompts, returning the prompts
/// in chain order.
pub async fn create_chain(pool: &DbPool, len: usize) -> (i64, Vec<Prompt>) {
    let project = ProjectRepo::create(pool, &new_project("Chain")).await.unwrap();
    let mut prompts: Vec<Prompt> = Vec::with_capacity(len);
    for i in 0..len {
        let parent = prompts.last().map(|p| p.id);
        let prompt = PromptRepo::create(pool, &new_prompt(project.id, parent, &format!("T{i}")))
            .await
            .unwrap();
        prompts.push(prompt);
    }
    (project.id, prompts)
}

pub async fn add_node(pool: &DbPool, prompt_id: i64, name: &str) -> i64 {
    NodeRepo::create(pool, &new_node(prompt_id, name))
        .await
        .unwrap()
        .id
}
