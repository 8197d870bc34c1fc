use std::collections::BTreeSet;

use crate::{
    animation::{
        playback::Playback,
        player::{ManualClock, Player, PlayerState},
    },
    compile::{Minifier, ModulePlan, RuntimeCompiler, minify_runtime},
    decode::normalize_payload,
    document::{
        ScriptBlock, extract_payload_literal, find_script_block, replace_script_block,
        script_content, strip_ui_artifacts, wrap_runtime,
    },
    eval::{EvaluatedFrame, FrameEvaluator},
    features::{Capabilities, detect_capabilities},
    foundation::{
        config::{ConvertOptions, RuntimeConfig},
        error::{ConvertError, ConvertResult},
    },
    payload::model::Payload,
};

/// An exported document with its payload extracted, decoded and pruned.
#[derive(Clone, Debug)]
pub struct LoadedDocument {
    /// Document text after UI stripping. `script` indexes into this.
    pub svg: String,
    pub script: ScriptBlock,
    pub player_id: String,
    pub payload: Payload,
    pub removed_ids: BTreeSet<String>,
    /// Encoded fields replaced by their decoded values.
    pub decoded_fields: usize,
    pub pruned_elements: usize,
}

impl LoadedDocument {
    pub fn capabilities(&self) -> Capabilities {
        detect_capabilities(&self.payload)
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct Conversion {
    #[serde(skip)]
    pub svg: String,
    pub capabilities: Capabilities,
    pub plan: ModulePlan,
    pub minifier: Minifier,
    pub removed_ids: BTreeSet<String>,
    pub runtime_bytes: usize,
}

/// Everything up to, but excluding, runtime generation.
#[tracing::instrument(skip_all, fields(bytes = svg.len(), keep_ui = keep_ui))]
pub fn load(svg: &str, keep_ui: bool) -> ConvertResult<LoadedDocument> {
    let (svg, removed_ids) = if keep_ui {
        (svg.to_string(), BTreeSet::new())
    } else {
        let stripped = strip_ui_artifacts(svg);
        (stripped.svg, stripped.removed_ids)
    };

    // Located after stripping so the offsets match the text we splice into.
    let script = find_script_block(&svg)
        .ok_or_else(|| ConvertError::extraction("no player script block found in the document"))?;
    let literal = extract_payload_literal(script_content(script.text(&svg)))?;

    let mut payload = Payload::from_json(&literal.json)?;
    let decoded_fields = normalize_payload(&mut payload, &literal.player_id)?;
    let pruned_elements = payload.prune_elements(&removed_ids);
    tracing::debug!(
        animations = payload.animations.len(),
        elements = payload.element_count(),
        pruned_elements,
        "payload loaded"
    );

    Ok(LoadedDocument {
        svg,
        script,
        player_id: literal.player_id,
        payload,
        removed_ids,
        decoded_fields,
        pruned_elements,
    })
}

/// Replaces the proprietary player in `svg` with a generated runtime.
#[tracing::instrument(skip_all, fields(bytes = svg.len()))]
pub fn convert(svg: &str, opts: &ConvertOptions) -> ConvertResult<Conversion> {
    let doc = load(svg, opts.keep_ui)?;
    let capabilities = doc.capabilities();
    let unit = RuntimeCompiler::new(opts.runtime).compile(&doc.payload, &capabilities)?;
    let minified = minify_runtime(unit.code, opts.minify);
    let runtime_bytes = minified.code.len();

    let svg = replace_script_block(&doc.svg, doc.script, &wrap_runtime(&minified.code));
    tracing::debug!(runtime_bytes, output_bytes = svg.len(), "document rewritten");

    Ok(Conversion {
        svg,
        capabilities,
        plan: unit.plan,
        minifier: minified.used,
        removed_ids: doc.removed_ids,
        runtime_bytes,
    })
}

/// One frame of the reference player, as the emitted runtime would draw it.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SampledFrame {
    pub animation: usize,
    pub elapsed_ms: f64,
    pub duration: f64,
    pub state: PlayerState,
    pub playback: Playback,
    pub frame: EvaluatedFrame,
}

/// Plays animation `index` from the start for `elapsed_ms` and evaluates
/// the frame drawn at that moment.
#[tracing::instrument(skip(doc, config))]
pub fn sample_frame(
    doc: &LoadedDocument,
    index: usize,
    elapsed_ms: f64,
    config: &RuntimeConfig,
) -> ConvertResult<SampledFrame> {
    let anim = doc.payload.animations.get(index).ok_or_else(|| {
        ConvertError::payload(format!(
            "animation {index} out of range ({} animations)",
            doc.payload.animations.len()
        ))
    })?;

    let clock = ManualClock::new(0.0);
    let mut player = Player::new(
        anim.playback_settings(),
        anim.duration(),
        clock.clone(),
        |_: f64| {},
    );
    player.play();
    clock.set(elapsed_ms.max(0.0));
    let playback = player
        .tick()
        .ok_or_else(|| ConvertError::payload("player did not draw a frame"))?;

    let plan = ModulePlan::from(&doc.capabilities());
    let frame = FrameEvaluator::new(plan, config).eval_frame(&anim.element_definitions(), playback.t);

    Ok(SampledFrame {
        animation: index,
        elapsed_ms,
        duration: player.duration(),
        state: player.state(),
        playback,
        frame,
    })
}
