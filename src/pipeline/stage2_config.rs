use anyhow::Result;
use tracing::info;

use crate::config;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage2Config;

impl Stage2Config {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Config {
    fn name(&self) -> &'static str {
        "stage2_config"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let cfg = config::load_effective(ctx.config_path.as_deref())?;
        info!(
            user_config = ctx.config_path.is_some(),
            zero_is_absent = cfg.zero_is_absent,
            score_cap = cfg.score_cap,
            "config_ready"
        );
        ctx.config = Some(cfg);
        Ok(())
    }
}
