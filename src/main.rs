use anyhow::Result;

fn main() -> Result<()> {
    forum_archiver::cli::run()
}
