#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("portfolio-site runs in the browser. Use `trunk serve` to develop or `trunk build --release` to produce dist/.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    portfolio_site::frontend::run();
}
