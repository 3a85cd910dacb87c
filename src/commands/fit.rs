use squarepack::classify_fit;

use crate::options::FitOptions;

pub fn fit(options: FitOptions) -> anyhow::Result<()> {
    let candidate = options.candidate;
    let container = options.container;

    let fit = classify_fit(
        candidate.width,
        candidate.height,
        container.width,
        container.height,
    );

    log::debug!("{} against {} is {:?}", candidate, container, fit);

    println!("{} {} in {}", candidate, fit, container);

    Ok(())
}
