use clap::Parser as _;
use sfmix::BaseArgs;

pub fn main() -> anyhow::Result<()> {
    let args = BaseArgs::parse();
    args.evaluate()
}
