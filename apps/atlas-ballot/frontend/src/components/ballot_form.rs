#![allow(non_snake_case)]

use dioxus::prelude::*;
use types_rs::ballot::{BallotDraft, BallotField, BallotStatus, BallotSubmission};
use types_rs::candidate::Candidate;
use types_rs::redaction::{contains_redactable_text, redact_free_text};
use ui_rs::{Button, TextField};

use crate::api::ApiClient;

/// What the form last reported to the voter.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pending,
    Missing(Vec<BallotField>),
    Status(BallotStatus),
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Status(status) if status.is_counted())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateList<'a> {
    Loading,
    Loaded(&'a [Candidate]),
    Failed(&'a str),
}

/// A single field edit coming from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BallotEdit {
    BallotNumber(String),
    NationalId(String),
    Candidate(String),
    Comments(String),
}

impl BallotEdit {
    pub fn apply(self, draft: &mut BallotDraft) {
        match self {
            Self::BallotNumber(value) => draft.ballot_number = value,
            Self::NationalId(value) => draft.voter_national_id = value,
            Self::Candidate(value) => draft.chosen_candidate_id = value,
            Self::Comments(value) => draft.voter_comments = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// A request is in flight or the ballot is already counted.
    Ignore,
    Missing(Vec<BallotField>),
    Send(BallotSubmission),
}

/// Decides what a submit event does. Must be given the latest state, not the
/// state of the last render: several submit events can be handled before the
/// form re-renders.
#[must_use]
pub fn plan_submission(draft: &BallotDraft, is_submitting: bool, outcome: &Outcome) -> SubmitAction {
    if is_submitting || outcome.is_counted() {
        return SubmitAction::Ignore;
    }

    match draft.validate() {
        Ok(submission) => SubmitAction::Send(submission),
        Err(missing) => SubmitAction::Missing(missing),
    }
}

#[derive(PartialEq, Props)]
pub struct BallotFormProps {
    pub api: ApiClient,
}

pub fn BallotForm(cx: Scope<BallotFormProps>) -> Element {
    let draft = use_ref(cx, BallotDraft::default);
    let is_submitting = use_state(cx, || false);
    let outcome = use_state(cx, || Outcome::Pending);

    let candidates = use_future(cx, (), |_| {
        let api = cx.props.api.clone();
        async move { api.get_all_candidates().await }
    });
    let candidate_list = match candidates.value() {
        Some(Ok(candidates)) => CandidateList::Loaded(candidates),
        Some(Err(err)) => CandidateList::Failed(cx.bump().alloc_str(&err.to_string())),
        None => CandidateList::Loading,
    };

    let submit = move |_: FormEvent| {
        let latest_outcome = outcome.current();
        let action = plan_submission(&draft.read(), *is_submitting.current(), &latest_outcome);
        let submission = match action {
            SubmitAction::Send(submission) => submission,
            SubmitAction::Missing(missing) => {
                outcome.set(Outcome::Missing(missing));
                return;
            }
            SubmitAction::Ignore => {
                log::debug!("ignoring submit while a ballot is in flight or counted");
                return;
            }
        };

        is_submitting.set(true);
        cx.spawn({
            to_owned![is_submitting, outcome];
            let api = cx.props.api.clone();
            async move {
                let result = api.count_ballot(&submission).await;
                is_submitting.set(false);

                outcome.set(match result {
                    Ok(status) => Outcome::Status(status),
                    Err(err) => {
                        log::error!("error submitting ballot: {err}");
                        Outcome::Failed(err.to_string())
                    }
                });
            }
        });
    };

    render!(BallotFormView {
        draft: draft.read().clone(),
        candidates: candidate_list,
        is_submitting: *is_submitting.get(),
        outcome: outcome.get().clone(),
        onedit: move |edit: BallotEdit| edit.apply(&mut draft.write()),
        onsubmit: submit,
    })
}

#[derive(Props)]
pub struct BallotFormViewProps<'a> {
    draft: BallotDraft,
    candidates: CandidateList<'a>,
    is_submitting: bool,
    outcome: Outcome,
    onedit: Option<EventHandler<'a, BallotEdit>>,
    onsubmit: Option<EventHandler<'a, FormEvent>>,
}

/// The ballot form's markup, driven entirely by its props.
pub fn BallotFormView<'a>(cx: Scope<'a, BallotFormViewProps<'a>>) -> Element<'a> {
    let draft = &cx.props.draft;
    let is_locked = cx.props.is_submitting || cx.props.outcome.is_counted();
    let comment_preview = contains_redactable_text(&draft.voter_comments)
        .then(|| redact_free_text(&draft.voter_comments));
    let edit = move |edit: BallotEdit| {
        if let Some(onedit) = &cx.props.onedit {
            onedit.call(edit);
        }
    };

    render!(
        form {
            id: "ballot-form",
            class: "max-w-2xl mx-auto",
            prevent_default: "onsubmit",
            onsubmit: move |e| {
                if let Some(onsubmit) = &cx.props.onsubmit {
                    onsubmit.call(e);
                }
            },
            TextField {
                id: "ballot-number",
                label: "Ballot number",
                value: "{draft.ballot_number}",
                disabled: is_locked,
                oninput: move |e: FormEvent| edit(BallotEdit::BallotNumber(e.value.clone())),
            }
            TextField {
                id: "national-id",
                label: "National ID",
                value: "{draft.voter_national_id}",
                placeholder: "111-11-1111",
                disabled: is_locked,
                oninput: move |e: FormEvent| edit(BallotEdit::NationalId(e.value.clone())),
            }
            div {
                class: "mb-4",
                label { class: "block font-bold mb-1", r#for: "candidate", "Candidate" }
                match cx.props.candidates {
                    CandidateList::Loaded(candidates) => rsx!(
                        select {
                            id: "candidate",
                            class: "w-full border rounded-lg px-3 py-2 text-xl dark:bg-gray-700",
                            value: "{draft.chosen_candidate_id}",
                            disabled: is_locked,
                            oninput: move |e| edit(BallotEdit::Candidate(e.value.clone())),
                            option { value: "", disabled: true, "Select a candidate" }
                            for candidate in candidates.iter() {
                                option {
                                    value: "{candidate.candidate_id}",
                                    "{candidate.name}"
                                }
                            }
                        }
                    ),
                    CandidateList::Failed(err) => rsx!(
                        p { class: "text-red-700", "Unable to load candidates: {err}" }
                    ),
                    CandidateList::Loading => rsx!(p { "Loading candidates…" }),
                }
            }
            TextField {
                id: "comments",
                label: "Comments (optional)",
                value: "{draft.voter_comments}",
                multiline: true,
                disabled: is_locked,
                oninput: move |e: FormEvent| edit(BallotEdit::Comments(e.value.clone())),
            }
            comment_preview.map(|preview| rsx!(
                div {
                    id: "comment-preview",
                    class: "mb-4 p-3 rounded-lg bg-yellow-100 dark:bg-yellow-900",
                    p { class: "font-bold", "Your comment will be stored as:" }
                    p { class: "italic", "{preview}" }
                }
            ))
            Button {
                kind: "submit",
                disabled: is_locked,
                if cx.props.is_submitting { "Submitting…" } else { "Cast Ballot" }
            }
            match &cx.props.outcome {
                Outcome::Pending => None,
                Outcome::Missing(missing) => {
                    let fields = missing.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
                    Some(rsx!(p { class: "mt-4 text-red-700", "Please fill in: {fields}." }))
                }
                Outcome::Status(status) if status.is_counted() => Some(rsx!(
                    p { class: "mt-4 text-green-700 font-bold", "{status.voter_message()}" }
                )),
                Outcome::Status(status) => Some(rsx!(
                    p { class: "mt-4 text-red-700", "{status.voter_message()}" }
                )),
                Outcome::Failed(err) => Some(rsx!(
                    p { class: "mt-4 text-red-700", "Your ballot could not be submitted: {err}" }
                )),
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use types_rs::candidate::CandidateId;

    use super::*;

    fn complete_draft() -> BallotDraft {
        BallotDraft {
            ballot_number: "abc123".to_owned(),
            voter_national_id: "111-11-1111".to_owned(),
            chosen_candidate_id: "2".to_owned(),
            voter_comments: String::new(),
        }
    }

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate::new(CandidateId::from("1".to_owned()), "Joseph Klimek".to_owned()),
            Candidate::new(CandidateId::from("2".to_owned()), "Rose Hervey".to_owned()),
        ]
    }

    fn render_view(
        draft: BallotDraft,
        candidates: CandidateList<'_>,
        is_submitting: bool,
        outcome: Outcome,
    ) -> String {
        dioxus_ssr::render_lazy(rsx! {
            BallotFormView {
                draft: draft,
                candidates: candidates,
                is_submitting: is_submitting,
                outcome: outcome,
            }
        })
    }

    /// Whether the submit button carries a truthy `disabled` attribute. The
    /// class list mentions `disabled:` too, so whole attributes are compared.
    fn submit_disabled(html: &str) -> bool {
        let start = html.find(r#"type="submit""#).expect("no submit button");
        let tag_start = html[..start].rfind("<button").expect("no button tag");
        let tag_end = start + html[start..].find('>').expect("unterminated button tag");
        html[tag_start..=tag_end]
            .split_whitespace()
            .map(|token| token.trim_end_matches('>'))
            .any(|token| {
                matches!(
                    token,
                    "disabled" | "disabled=true" | r#"disabled="true""# | r#"disabled="""#
                )
            })
    }

    #[test]
    fn test_plan_sends_complete_draft() {
        match plan_submission(&complete_draft(), false, &Outcome::Pending) {
            SubmitAction::Send(submission) => assert_eq!(submission.ballot_number, "abc123"),
            other => panic!("expected a submission, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_reports_missing_fields_without_sending() {
        assert_eq!(
            plan_submission(&BallotDraft::default(), false, &Outcome::Pending),
            SubmitAction::Missing(vec![
                BallotField::BallotNumber,
                BallotField::NationalId,
                BallotField::Candidate,
            ])
        );
    }

    #[test]
    fn test_plan_ignores_submit_while_in_flight() {
        assert_eq!(
            plan_submission(&complete_draft(), true, &Outcome::Pending),
            SubmitAction::Ignore
        );
    }

    #[test]
    fn test_plan_ignores_submit_after_ballot_counted() {
        assert_eq!(
            plan_submission(
                &complete_draft(),
                false,
                &Outcome::Status(BallotStatus::BallotCounted)
            ),
            SubmitAction::Ignore
        );
    }

    #[test]
    fn test_plan_allows_retry_after_rejection() {
        assert!(matches!(
            plan_submission(
                &complete_draft(),
                false,
                &Outcome::Status(BallotStatus::InvalidBallot)
            ),
            SubmitAction::Send(_)
        ));
    }

    #[test]
    fn test_edit_updates_one_field() {
        let mut draft = complete_draft();
        BallotEdit::Comments("hello".to_owned()).apply(&mut draft);
        assert_eq!(
            draft,
            BallotDraft {
                voter_comments: "hello".to_owned(),
                ..complete_draft()
            }
        );
    }

    #[test]
    fn test_form_shows_loading_line_on_mount() {
        let mut dom = VirtualDom::new_with_props(
            BallotForm,
            BallotFormProps {
                api: ApiClient::new(reqwest::Url::parse("http://localhost:5000/").unwrap()),
            },
        );
        let _ = dom.rebuild();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"id="ballot-form""#), "{html}");
        assert!(html.contains("Loading candidates…"), "{html}");
        assert!(!html.contains("<select"), "{html}");
    }

    #[test]
    fn test_view_lists_candidates() {
        let candidates = candidates();
        let html = render_view(
            BallotDraft::default(),
            CandidateList::Loaded(&candidates),
            false,
            Outcome::Pending,
        );

        assert!(html.contains("<select"), "{html}");
        assert!(html.contains("Joseph Klimek"), "{html}");
        assert!(html.contains(r#"value="2""#), "{html}");
        assert!(html.contains("Rose Hervey"), "{html}");
        assert!(!html.contains("Loading candidates"), "{html}");
    }

    #[test]
    fn test_view_shows_candidate_error() {
        let html = render_view(
            BallotDraft::default(),
            CandidateList::Failed("request failed: connection refused"),
            false,
            Outcome::Pending,
        );

        assert!(
            html.contains("Unable to load candidates: request failed: connection refused"),
            "{html}"
        );
        assert!(!html.contains("<select"), "{html}");
    }

    #[test]
    fn test_view_lists_missing_fields() {
        let html = render_view(
            BallotDraft::default(),
            CandidateList::Loading,
            false,
            Outcome::Missing(vec![BallotField::BallotNumber, BallotField::Candidate]),
        );

        assert!(html.contains("Please fill in: ballot number, candidate."), "{html}");
        assert!(!submit_disabled(&html), "{html}");
    }

    #[test]
    fn test_view_disables_submit_while_in_flight() {
        let html = render_view(complete_draft(), CandidateList::Loading, true, Outcome::Pending);

        assert!(submit_disabled(&html), "{html}");
        assert!(html.contains("Submitting…"), "{html}");
    }

    #[test]
    fn test_view_locks_after_ballot_counted() {
        let candidates = candidates();
        let html = render_view(
            complete_draft(),
            CandidateList::Loaded(&candidates),
            false,
            Outcome::Status(BallotStatus::BallotCounted),
        );

        assert!(submit_disabled(&html), "{html}");
        assert!(html.contains(BallotStatus::BallotCounted.voter_message()), "{html}");
        assert!(html.contains("Cast Ballot"), "{html}");
    }

    #[test]
    fn test_view_keeps_form_open_after_rejection() {
        let html = render_view(
            complete_draft(),
            CandidateList::Loading,
            false,
            Outcome::Status(BallotStatus::VoterBallotMismatch),
        );

        assert!(!submit_disabled(&html), "{html}");
        assert!(html.contains(BallotStatus::VoterBallotMismatch.voter_message()), "{html}");
    }

    #[test]
    fn test_view_previews_redacted_comment() {
        let draft = BallotDraft {
            voter_comments: "call me on 555-123-4567".to_owned(),
            ..complete_draft()
        };
        let html = render_view(draft, CandidateList::Loading, false, Outcome::Pending);

        assert!(html.contains(r#"id="comment-preview""#), "{html}");
        assert!(html.contains("call me on [REDACTED PHONE NUMBER]"), "{html}");
    }

    #[test]
    fn test_view_omits_preview_for_plain_comment() {
        let draft = BallotDraft {
            voter_comments: "Fix the roads.".to_owned(),
            ..complete_draft()
        };
        let html = render_view(draft, CandidateList::Loading, false, Outcome::Pending);

        assert!(!html.contains("comment-preview"), "{html}");
    }
}
