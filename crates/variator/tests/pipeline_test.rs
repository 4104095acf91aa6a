//! Tests for the variation pipeline against a stub completion driver.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use variator::{
    AuthenticationError, Comparator, Completion, CompletionDriver, GenerationRequest,
    PromptVariator, ServiceErrorKind, VariationPipeline, VariatorErrorKind, VariatorResult,
};

const QUESTION: &str = "What is the capital of Ukraine?";

const VARIATIONS: &str = "\n\n1. What city is Ukraine's capital?\n2. Name Ukraine's capital city.\n3. So what is the capital of Ukraine?\n";

/// Stub driver: echoed requests get a fixed list, others a canned answer.
#[derive(Clone)]
struct StubDriver {
    variations: String,
    answers: HashMap<String, String>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl StubDriver {
    fn new(variations: &str) -> Self {
        let answers = [
            (QUESTION, "The capital of Ukraine is Kyiv."),
            ("What city is Ukraine's capital?", "Kyiv is the capital."),
            ("Name Ukraine's capital city.", "Bananas are yellow."),
            ("So what is the capital of Ukraine?", "The capital of Ukraine is Kyiv."),
        ]
        .into_iter()
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .collect();

        Self {
            variations: variations.to_string(),
            answers,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionDriver for StubDriver {
    async fn complete(&self, request: &GenerationRequest) -> VariatorResult<Vec<Completion>> {
        self.requests.lock().unwrap().push(request.clone());

        let text = if *request.echo_prompt() {
            format!("{}{}", request.prompt(), self.variations)
        } else {
            self.answers
                .get(request.prompt())
                .cloned()
                .unwrap_or_else(|| "I do not know.".to_string())
        };
        Ok(vec![Completion::new(0, text)])
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

/// Driver that answers with no choices at all.
#[derive(Clone)]
struct SilentDriver;

#[async_trait]
impl CompletionDriver for SilentDriver {
    async fn complete(&self, _request: &GenerationRequest) -> VariatorResult<Vec<Completion>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &'static str {
        "silent"
    }

    fn model_name(&self) -> &str {
        "silent-model"
    }
}

/// Driver whose credentials are always rejected.
#[derive(Clone)]
struct RejectingDriver;

#[async_trait]
impl CompletionDriver for RejectingDriver {
    async fn complete(&self, _request: &GenerationRequest) -> VariatorResult<Vec<Completion>> {
        Err(AuthenticationError::new("Incorrect API key provided").into())
    }

    fn provider_name(&self) -> &'static str {
        "rejecting"
    }

    fn model_name(&self) -> &str {
        "rejecting-model"
    }
}

#[tokio::test]
async fn test_pipeline_scores_question_and_every_variation() {
    let driver = StubDriver::new(VARIATIONS);
    let report = VariationPipeline::new(driver.clone())
        .run(QUESTION)
        .await
        .expect("pipeline succeeds");

    assert_eq!(
        report.variations(),
        &[
            "What city is Ukraine's capital?",
            "Name Ukraine's capital city.",
            "So what is the capital of Ukraine?",
        ]
    );
    assert!(report.header().contains(QUESTION));

    let results = report.results();
    assert_eq!(results.len(), 4);
    assert_eq!(results.iter().filter(|v| v.prompt() == QUESTION).count(), 1);

    let scores: Vec<f64> = results.iter().map(|v| *v.score()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "not sorted: {:?}", scores);

    let last = results.iter().last().expect("four results");
    assert_eq!(last.prompt(), "Name Ukraine's capital city.");
    assert_eq!(*last.score(), 0.0);
}

#[tokio::test]
async fn test_pipeline_request_shapes() {
    let driver = StubDriver::new(VARIATIONS);
    VariationPipeline::new(driver.clone())
        .with_variation_count(3)
        .run(QUESTION)
        .await
        .expect("pipeline succeeds");

    let requests = driver.requests();
    assert_eq!(requests.len(), 5);

    let first = &requests[0];
    assert!(*first.echo_prompt());
    assert!(first.prompt().contains("Provide 3 variations"));
    assert!(first.prompt().ends_with(QUESTION));

    assert_eq!(requests[1].prompt(), QUESTION);
    for request in &requests[1..] {
        assert!(!*request.echo_prompt());
        assert_eq!(*request.sample_count(), 1);
    }
}

#[tokio::test]
async fn test_equal_scores_keep_prompt_order() {
    let driver = StubDriver::new(VARIATIONS);
    let report = VariationPipeline::new(driver).run(QUESTION).await.unwrap();

    // The third variation shares every non-stop word with the question, so both score alike.
    let tied: Vec<&str> = report
        .results()
        .iter()
        .filter(|v| v.completion() == "The capital of Ukraine is Kyiv.")
        .map(|v| v.prompt().as_str())
        .collect();
    assert_eq!(tied, [QUESTION, "So what is the capital of Ukraine?"]);
}

#[tokio::test]
async fn test_unparsable_variations_fall_back_to_question() {
    let driver = StubDriver::new("\nSorry, I cannot help with that.");
    let report = VariationPipeline::new(driver).run(QUESTION).await.unwrap();

    assert!(report.variations().is_empty());
    assert_eq!(report.results().len(), 1);
    assert_eq!(report.results().best().unwrap().prompt(), QUESTION);
}

#[tokio::test]
async fn test_no_completion_is_empty_response_error() {
    let err = PromptVariator::new(SilentDriver)
        .variations(QUESTION)
        .await
        .expect_err("no choices");

    match err.kind() {
        VariatorErrorKind::Service(e) => assert_eq!(*e.kind(), ServiceErrorKind::EmptyResponse),
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_authentication_failure_propagates() {
    let err = VariationPipeline::new(RejectingDriver)
        .run(QUESTION)
        .await
        .expect_err("credentials rejected");

    assert!(err.is_authentication());
}

#[tokio::test]
async fn test_comparator_with_empty_prompt_list() {
    let results = Comparator::new(SilentDriver).compare(&[]).await.unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_similarity_matches_scorer() {
    let comparator = Comparator::new(SilentDriver);
    assert_eq!(
        comparator.compute_similarity(QUESTION, "The capital of Ukraine is Kyiv."),
        variator::score(QUESTION, "The capital of Ukraine is Kyiv."),
    );
}
