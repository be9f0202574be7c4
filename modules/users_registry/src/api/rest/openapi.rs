use utoipa::OpenApi;

use crate::api::rest::dto::{MessageDto, UserDto, UserReq};
use crate::api::rest::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Users registry", description = "User records with validation and a minimum-age rule"),
    paths(
        handlers::list_users,
        handlers::get_user,
        handlers::create_user,
        handlers::replace_user,
        handlers::patch_user,
        handlers::delete_user,
        handlers::search_users,
    ),
    components(schemas(UserDto, UserReq, MessageDto)),
    tags((name = "users", description = "User management"))
)]
pub struct UsersApiDoc;
