/* recipe-books
 * Copyright (C) 2025 Frederic Henrichs <frederic@tinkerforge.com>
 *
 * This library is free software; you can redistribute it and/or
 * modify it under the terms of the GNU Lesser General Public
 * License as published by the Free Software Foundation; either
 * version 2 of the License, or (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
 * Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public
 * License along with this library; if not, write to the
 * Free Software Foundation, Inc., 59 Temple Place - Suite 330,
 * Boston, MA 02111-1307, USA.
 */


use actix_web::{get, post, web, HttpResponse};
use askama::Template;
use validator::Validate;

use crate::{
    flash::Flash,
    models::{
        context::RequestContext,
        error_messages,
        evaluation::{EvaluationForm, EVALUATION_CHOICES},
        search::{choices, Choice},
    },
    store::evaluations::{submit_evaluation, EvaluationOutcome},
    utils::{redirect, render, render_flashed, web_block_unpacked},
};

const ALREADY_SUBMITTED: &str =
    "You have already submitted feedback. Sorry, you can only submit feedback once.";

#[derive(Template)]
#[template(path = "eval.html")]
struct EvalPage<'a> {
    flash: Option<String>,
    errors: Vec<String>,
    form: &'a EvaluationForm,
    answers: Vec<Choice>,
}

#[derive(Template)]
#[template(path = "thanks.html")]
struct ThanksPage {
    flash: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(eval)
        .service(eval_results_query)
        .service(eval_results_form);
}

#[get("/eval")]
pub async fn eval(flash: Flash) -> actix_web::Result<HttpResponse> {
    let form = EvaluationForm::default();
    render_flashed(
        &EvalPage {
            flash: flash.message(),
            errors: Vec::new(),
            form: &form,
            answers: choices(&EVALUATION_CHOICES, ""),
        },
        &flash,
    )
}

#[get("/evalResults")]
pub async fn eval_results_query(
    ctx: RequestContext,
    form: web::Query<EvaluationForm>,
) -> actix_web::Result<HttpResponse> {
    eval_results(ctx, form.into_inner()).await
}

#[post("/evalResults")]
pub async fn eval_results_form(
    ctx: RequestContext,
    form: web::Form<EvaluationForm>,
) -> actix_web::Result<HttpResponse> {
    eval_results(ctx, form.into_inner()).await
}

/// Store the evaluation and thank the user. Only one evaluation per email is
/// accepted, a repeated one is answered with a message instead of an error.
async fn eval_results(ctx: RequestContext, form: EvaluationForm) -> actix_web::Result<HttpResponse> {
    if form.is_blank() {
        return Ok(redirect("/eval"));
    }
    if let Err(errors) = form.validate() {
        return render(&EvalPage {
            flash: None,
            errors: error_messages(&errors),
            form: &form,
            answers: choices(&EVALUATION_CHOICES, &form.evaluation),
        });
    }

    let (mut conn, _) = ctx.into_parts();
    let outcome = web_block_unpacked(move || {
        submit_evaluation(
            &mut conn,
            form.positive_experience(),
            &form.explaination,
            form.name(),
            form.email(),
        )
    })
    .await?;

    let flash = match outcome {
        EvaluationOutcome::Recorded(_) => None,
        EvaluationOutcome::AlreadySubmitted => Some(ALREADY_SUBMITTED.to_string()),
    };
    render(&ThanksPage { flash })
}
