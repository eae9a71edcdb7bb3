//! Mock generator and driver shared by the pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use sceneweaver_core::{Character, ProductionRequest, QualityMode, SceneRange};
use sceneweaver_error::{HttpError, SceneweaverResult};
use sceneweaver_interface::{AssetDriver, GenerationCall, RenderCall, SceneGenerator};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

pub fn request(start: u32, end: u32, quality_mode: QualityMode) -> ProductionRequest {
    ProductionRequest::builder()
        .synopsis("A lighthouse keeper befriends a storm")
        .visual_style("Moody watercolor, 16:9")
        .character_roster(vec![
            Character::new("Mira", "female", "34", "Red scarf, salt-grey coat"),
            Character::new("Tempest", "none", "ageless", "A cloud with lightning eyes"),
        ])
        .scene_range(SceneRange::new(start, end))
        .quality_mode(quality_mode)
        .build()
        .unwrap()
}

/// Generator that answers with `requested_count` scenes.
///
/// Scene text is numbered by a running counter so chaining can be checked.
/// Every scene claims `sceneNumber: 1` to exercise renumbering.
pub struct EchoGenerator {
    calls: Mutex<Vec<GenerationCall>>,
    produced: AtomicUsize,
    fail_on_call: Option<usize>,
    short_on_call: Option<usize>,
    on_call: Option<Box<dyn Fn(usize) + Send + Sync>>,
}

impl EchoGenerator {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            produced: AtomicUsize::new(0),
            fail_on_call: None,
            short_on_call: None,
            on_call: None,
        }
    }

    /// Fail with a transport error on the given zero-based call.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Return one scene too few on the given zero-based call.
    pub fn short_on(mut self, call: usize) -> Self {
        self.short_on_call = Some(call);
        self
    }

    /// Run `hook` with the call index while the call is in flight.
    pub fn on_call(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_call = Some(Box::new(hook));
        self
    }

    /// Start the narrative counter at `offset`.
    pub fn starting_at(self, offset: usize) -> Self {
        self.produced.store(offset, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> Vec<GenerationCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

pub fn narrative(n: usize) -> String {
    format!("Narrative beat {}", n)
}

#[async_trait]
impl SceneGenerator for EchoGenerator {
    async fn generate(&self, call: &GenerationCall) -> SceneweaverResult<String> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call.clone());
            calls.len() - 1
        };
        if let Some(hook) = &self.on_call {
            hook(index);
        }
        if self.fail_on_call == Some(index) {
            return Err(HttpError::with_status(503, "service unavailable").into());
        }

        let count = if self.short_on_call == Some(index) {
            call.requested_count - 1
        } else {
            call.requested_count
        };
        let scenes: Vec<serde_json::Value> = (0..count)
            .map(|_| {
                let n = self.produced.fetch_add(1, Ordering::SeqCst) + 1;
                serde_json::json!({
                    "sceneNumber": 1,
                    "narrative": narrative(n),
                    "generationPrompt": format!("Prompt {}", n),
                    "voiceover": format!("Voiceover {}", n),
                })
            })
            .collect();
        Ok(serde_json::to_string(&scenes).unwrap())
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-1"
    }
}

type GateResult = Result<String, String>;

/// Asset driver whose renders wait for the test to release them.
///
/// Prompts without a gate resolve immediately with a counter-stamped asset.
pub struct GatedDriver {
    gates: Mutex<HashMap<String, oneshot::Receiver<GateResult>>>,
    renders: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl GatedDriver {
    pub fn new() -> Self {
        Self {
            gates: Mutex::new(HashMap::new()),
            renders: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Hold the next render of `prompt` until the sender fires.
    pub fn gate(&self, prompt: &str) -> oneshot::Sender<GateResult> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(prompt.to_string(), rx);
        tx
    }

    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetDriver for GatedDriver {
    async fn render(&self, call: &RenderCall) -> SceneweaverResult<String> {
        let n = self.renders.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts.lock().unwrap().push(call.prompt.clone());
        let gate = self.gates.lock().unwrap().remove(&call.prompt);

        let outcome = match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err("gate dropped".to_string())),
            None => Ok(format!("asset://{}/{}", call.prompt, n)),
        };
        outcome.map_err(|reason| HttpError::new(reason).into())
    }

    fn provider_name(&self) -> &'static str {
        "gated"
    }
}
