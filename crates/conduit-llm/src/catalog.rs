//! Well-known model identifiers used by callers
//!
//! Together entries use the `together/` scheme so they always route to
//! Together AI. The remaining entries belong to providers this crate does not
//! wire up and must never classify as Together.

pub const TOGETHER_DEEPSEEK_V3: &str = "together/deepseek-ai/DeepSeek-V3";
pub const TOGETHER_QWEN_2_5_CODER: &str = "together/Qwen/Qwen2.5-Coder-32B-Instruct";
pub const TOGETHER_LLAMA_3_3_70B: &str = "together/meta-llama/Llama-3.3-70B-Instruct-Turbo";

pub const GEMINI_2_5_PRO: &str = "google-ai-studio/gemini-2.5-pro";
pub const GEMINI_2_5_FLASH: &str = "google-ai-studio/gemini-2.5-flash";
pub const GEMINI_2_5_FLASH_LITE: &str = "google-ai-studio/gemini-2.5-flash-lite";

pub const CLAUDE_4_SONNET: &str = "anthropic/claude-sonnet-4-20250514";
pub const CLAUDE_4_OPUS: &str = "anthropic/claude-opus-4-20250514";

pub const OPENAI_5: &str = "openai/gpt-5";
pub const OPENAI_5_MINI: &str = "openai/gpt-5-mini";
pub const OPENAI_O3: &str = "openai/o3";

/// Sentinel meaning "no model"; never routable
pub const DISABLED: &str = "disabled";

/// Catalog entries served by Together AI
pub const TOGETHER_MODELS: &[&str] = &[TOGETHER_DEEPSEEK_V3, TOGETHER_QWEN_2_5_CODER, TOGETHER_LLAMA_3_3_70B];

/// Catalog entries served elsewhere
pub const EXTERNAL_MODELS: &[&str] = &[
    GEMINI_2_5_PRO,
    GEMINI_2_5_FLASH,
    GEMINI_2_5_FLASH_LITE,
    CLAUDE_4_SONNET,
    CLAUDE_4_OPUS,
    OPENAI_5,
    OPENAI_5_MINI,
    OPENAI_O3,
    DISABLED,
];
