//! Backlog queries.

use jiff::civil::Date;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Difficulty, Task},
};

const INSERT_TASK_SQL: &str = "INSERT INTO tasks (id, title, subject, deadline, difficulty, is_exam, description) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TASKS_SQL: &str = "SELECT id, title, subject, deadline, difficulty, is_exam, description FROM tasks ORDER BY position";
const SELECT_FIRST_TASK_SQL: &str = "SELECT position, id, title, subject, deadline, difficulty, is_exam, description FROM tasks WHERE id = ?1 ORDER BY position LIMIT 1";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE position = ?1";

impl super::Database {
    /// Appends a task to the end of the backlog.
    pub fn insert_task(&self, task: &Task) -> Result<()> {
        self.connection
            .execute(
                INSERT_TASK_SQL,
                params![
                    task.id,
                    task.title,
                    task.subject,
                    task.deadline.map(|date| date.to_string()),
                    task.difficulty.as_str(),
                    task.is_exam,
                    task.description,
                ],
            )
            .db_context("Failed to insert task")?;
        Ok(())
    }

    /// Lists the backlog in insertion order.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_SQL)
            .db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map([], |row| Self::row_to_task(row, 0))
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read task row")?;

        Ok(tasks)
    }

    /// Removes the earliest task with the given ID, returning it.
    pub fn remove_task(&mut self, id: &str) -> Result<Option<Task>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let found = tx
            .query_row(SELECT_FIRST_TASK_SQL, params![id], |row| {
                let position: i64 = row.get(0)?;
                Ok((position, Self::row_to_task(row, 1)?))
            })
            .optional()
            .db_context("Failed to look up task")?;

        let Some((position, task)) = found else {
            return Ok(None);
        };

        tx.execute(DELETE_TASK_SQL, params![position])
            .db_context("Failed to delete task")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(task))
    }

    /// Maps a row to a task, reading columns starting at `offset`.
    fn row_to_task(row: &Row<'_>, offset: usize) -> rusqlite::Result<Task> {
        let deadline: Option<String> = row.get(offset + 3)?;
        let deadline = deadline
            .map(|value| {
                value.parse::<Date>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(offset + 3, Type::Text, Box::new(e))
                })
            })
            .transpose()?;

        let difficulty: String = row.get(offset + 4)?;
        let difficulty = difficulty.parse::<Difficulty>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(offset + 4, Type::Text, e.into())
        })?;

        Ok(Task {
            id: row.get(offset)?,
            title: row.get(offset + 1)?,
            subject: row.get(offset + 2)?,
            deadline,
            difficulty,
            is_exam: row.get(offset + 5)?,
            description: row.get(offset + 6)?,
        })
    }
}
