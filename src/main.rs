fn main() {
    ovite::app::cli::run();
}
