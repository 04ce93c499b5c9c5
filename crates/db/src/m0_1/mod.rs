mod health_profile;
mod scan_history;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUsernameUk,
        user::CreateEmailUk,
        health_profile::CreateTable,
        scan_history::CreateTable,
        scan_history::CreateUserIdx
    ]
);
