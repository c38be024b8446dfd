use candle_core::Device;
use tracing::{debug, warn};

/// Picks the compute device for the sentence encoder.
///
/// GPU backends are tried in order (Metal, then CUDA) when their cargo feature is enabled.
/// Any failure lands on the CPU, which is always available.
pub fn select_device() -> Device {
    #[allow(unused_mut)]
    let mut failures: Vec<String> = Vec::new();

    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => {
                tracing::info!("Encoding on Metal GPU");
                return device;
            }
            Err(e) => failures.push(format!("metal: {e}")),
        }
    }

    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => {
                tracing::info!("Encoding on CUDA GPU");
                return device;
            }
            Err(e) => failures.push(format!("cuda: {e}")),
        }
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, encoding on CPU");
    } else {
        warn!(reason = %failures.join("; "), "GPU unavailable, encoding on CPU");
    }

    Device::Cpu
}
