fn main() -> anyhow::Result<()> {
    geomath::run()
}
