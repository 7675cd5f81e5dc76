fn main() {
    pyrite::board::init();
    pyrite::cli::run();
}
