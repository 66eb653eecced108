fn main() -> anyhow::Result<()> {
    study_shell::run()
}
