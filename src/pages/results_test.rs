use super::*;
use crate::state::thread::Toxicity;

fn comment(id: &str, score: f64, is_toxic: bool) -> AnalyzedComment {
    AnalyzedComment {
        id: id.to_owned(),
        body: format!("body of {id}"),
        toxicity: Toxicity { score, is_toxic, ..Toxicity::default() },
        ..AnalyzedComment::default()
    }
}

fn payload(comments: Vec<AnalyzedComment>) -> ThreadPayload {
    ThreadPayload { comments, ..ThreadPayload::default() }
}

#[test]
fn most_toxic_orders_by_score_and_skips_clean_comments() {
    let payload = payload(vec![
        comment("low", 0.71, true),
        comment("clean", 0.99, false),
        comment("high", 0.95, true),
        comment("mid", 0.80, true),
        comment("lowest", 0.70, true),
    ]);
    let ids: Vec<String> = most_toxic(&payload, 3).into_iter().map(|c| c.id).collect();
    assert_eq!(ids, ["high", "mid", "low"]);
}

#[test]
fn most_toxic_handles_fewer_than_limit() {
    assert_eq!(most_toxic(&payload(vec![comment("only", 0.9, true)]), 3).len(), 1);
    assert!(most_toxic(&payload(Vec::new()), 3).is_empty());
}

#[cfg(feature = "ssr")]
mod markup {
    use super::*;
    use crate::state::moderation::ModerationState;
    use crate::state::threshold::ThresholdBounds;

    #[test]
    fn view_link_and_reveal_previews_render_from_payload() {
        let payload = ThreadPayload {
            thread_url: "https://www.reddit.com/r/rust/comments/abc/".to_owned(),
            threshold: 0.4,
            comments: vec![comment("t1", 0.9, true), comment("ok", 0.1, false)],
            ..ThreadPayload::default()
        };
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(RwSignal::new(ModerationState::from_comments(&payload.comments)));
            provide_context(RwSignal::new(ThresholdState::new(payload.threshold, ThresholdBounds::default())));
            provide_context(payload);
            view! { <ResultsPage/> }.to_html()
        });

        assert!(html.contains(r#"id="viewWithThreshold""#), "{html}");
        assert!(html.contains("threshold=0.40"), "{html}");
        assert!(html.contains("Reveal Comment"), "{html}");
        assert!(html.contains("body of t1"), "{html}");
        assert!(!html.contains("body of ok"), "{html}");
    }
}
