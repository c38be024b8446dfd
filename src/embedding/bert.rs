use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;


#[derive(serde::Deserialize)]
struct HiddenDims {
    hidden_size: usize,
}

/// BERT encoder with attention-masked mean pooling (sentence-transformers layout).
pub struct SentenceBert {
    bert: BertModel,
    hidden_size: usize,
}

impl SentenceBert {
    /// Loads `config.json` and `model.safetensors` from `model_dir`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_content = std::fs::read_to_string(model_dir.join("config.json"))?;

        let weights_path = model_dir.join("model.safetensors");
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        Self::from_config_json(&config_content, vb)
    }

    /// Builds the encoder from a `config.json` body and a weight source.
    pub fn from_config_json(config_json: &str, vb: VarBuilder) -> Result<Self> {
        let config: Config = serde_json::from_str(config_json)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;
        let dims: HiddenDims = serde_json::from_str(config_json)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        // sentence-transformers exports drop the `bert.` prefix; HF exports keep it.
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb, &config)?
        };

        Ok(Self {
            bert,
            hidden_size: dims.hidden_size,
        })
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Runs the encoder and mean-pools token states over the attention mask.
    ///
    /// Inputs are `[batch, seq_len]`; the result is `[batch, hidden_size]`.
    pub fn forward_pooled(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        let hidden = self
            .bert
            .forward(input_ids, token_type_ids, Some(attention_mask))?;

        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?.clamp(1e-9f32, f32::MAX)?;

        summed.broadcast_div(&counts)
    }
}
