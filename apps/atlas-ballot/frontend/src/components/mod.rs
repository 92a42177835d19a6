mod ballot_form;

pub use ballot_form::{
    plan_submission, BallotEdit, BallotForm, BallotFormView, CandidateList, Outcome, SubmitAction,
};
