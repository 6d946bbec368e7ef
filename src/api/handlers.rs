use super::request::SolveRequest;
use super::response::Health;
use super::response::SolveResponse;
use crate::holdem::Solver;
use crate::holdem::SolverConfig;
use crate::holdem::Spot;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Health::ok())
}

/// shape errors are the caller's (400), anything after that is ours (500)
pub async fn solve(config: web::Data<SolverConfig>, req: web::Json<SolveRequest>) -> impl Responder {
    match Spot::try_from(&*req) {
        Err(e) => {
            log::warn!("rejected solve request: {}", e);
            HttpResponse::BadRequest().body(e.to_string())
        }
        Ok(spot) => {
            let config = **config;
            match web::block(move || Solver::solve(spot, config)).await {
                Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
                Ok(Err(e)) => HttpResponse::InternalServerError().body(e.to_string()),
                Ok(Ok(solution)) => HttpResponse::Ok().json(SolveResponse::from(solution)),
            }
        }
    }
}
