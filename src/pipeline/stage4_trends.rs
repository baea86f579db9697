use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::schema::v1::Mode;
use crate::scores::trend::{fit_series, trends_from_fits};

pub struct Stage4Trends;

impl Stage4Trends {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Trends {
    fn name(&self) -> &'static str {
        "stage4_trends"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.mode != Mode::Longitudinal {
            return Ok(());
        }
        let cfg = ctx.config.as_ref().context("scoring config missing")?;

        let fits = fit_series(&ctx.records, cfg);
        let trends = trends_from_fits(&fits);

        for f in &fits {
            info!(
                series = %f.series,
                points = f.points as u64,
                slope = f.slope,
                fired = f.fired,
                "series_fit"
            );
        }

        ctx.series_fits = fits;
        ctx.trends = Some(trends);
        info!("trends_ready");
        Ok(())
    }
}
