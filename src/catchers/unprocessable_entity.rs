use crate::actions::ActionResult;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::Request;

#[catch(422)]
pub fn unprocessable_entity_to_bad_request(_req: &Request) -> status::Custom<Json<ActionResult>> {
    status::Custom(
        Status::BadRequest,
        Json(ActionResult::failure("Invalid request")),
    )
}
