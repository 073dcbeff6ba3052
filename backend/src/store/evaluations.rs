use db_connector::{
    models::site_evaluations::{NewSiteEvaluation, SiteEvaluation},
    schema::site_evaluations,
};
use diesel::{prelude::*, SqliteConnection};

use crate::error::Error;

#[derive(Debug, PartialEq)]
pub enum EvaluationOutcome {
    Recorded(SiteEvaluation),
    AlreadySubmitted,
}

/// Store the evaluation unless one with the same email exists. Submissions
/// without an email count as one shared anonymous sender.
pub fn submit_evaluation(
    conn: &mut SqliteConnection,
    positive_experience: bool,
    explanation: &str,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<EvaluationOutcome, Error> {
    let email = email.map(str::to_lowercase);

    conn.immediate_transaction::<_, Error, _>(|conn| {
        let query = site_evaluations::table
            .select(site_evaluations::id)
            .into_boxed();
        let query = match &email {
            Some(email) => query.filter(site_evaluations::email.eq(email)),
            None => query.filter(site_evaluations::email.is_null()),
        };
        if query.first::<i32>(conn).optional()?.is_some() {
            return Ok(EvaluationOutcome::AlreadySubmitted);
        }

        let evaluation = diesel::insert_into(site_evaluations::table)
            .values(&NewSiteEvaluation {
                positive_experience,
                explanation,
                name,
                email: email.as_deref(),
            })
            .returning(SiteEvaluation::as_returning())
            .get_result(conn)?;
        log::info!("Recorded site evaluation {}", evaluation.id);

        Ok(EvaluationOutcome::Recorded(evaluation))
    })
}
