/// Evaluate `$body`, logging the elapsed time under `$title`.
#[macro_export]
macro_rules! profile(
  ($title: expr, $body: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $body;
    ::tracing::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
