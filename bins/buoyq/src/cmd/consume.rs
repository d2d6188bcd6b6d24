use queue_client::consumer::{self, ConsumerOpts};
use queue_client::resolve;
use queue_http::HttpQueue;

use crate::config::{ConsumeArgs, Effective};
use crate::error::CliError;

pub async fn run(args: ConsumeArgs) -> Result<(), CliError> {
    if args.duration <= 0.0 {
        return Err(CliError::Config(
            "--duration must be a positive number of minutes".into(),
        ));
    }

    let eff = Effective::new(&args.service)?;
    let service = HttpQueue::new(&eff.url, eff.token.as_deref())?;

    let queue = resolve(&service, &args.queue).await?;
    tracing::info!(queue = %queue.id, minutes = args.duration, "starting consumer");

    let mut opts = ConsumerOpts::for_minutes(args.duration);
    opts.idle_backoff = eff.backoff;
    consumer::run(&service, &queue, &opts).await?;
    Ok(())
}
