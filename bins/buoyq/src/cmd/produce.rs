use queue_client::producer::{self, ProducerOpts};
use queue_client::{Rng, resolve};
use queue_http::HttpQueue;

use crate::config::{Effective, ProduceArgs};
use crate::error::CliError;

pub async fn run(args: ProduceArgs) -> Result<(), CliError> {
    let eff = Effective::new(&args.service)?;
    let service = HttpQueue::new(&eff.url, eff.token.as_deref())?;

    let queue = resolve(&service, &args.queue).await?;
    tracing::info!(queue = %queue.id, count = args.count, "starting producer");

    let opts = ProducerOpts {
        count: args.count,
        pace: eff.pace,
    };
    let mut rng = Rng::new(args.seed);
    producer::run(&service, &queue, &opts, &mut rng).await?;
    Ok(())
}
