
use {
    crate::{
        basis::{Movement, Operation, Pos, ProblemHeader, Rot},
        circle, kaitou, ppm,
    },
    anyhow::{Context as _, Result},
    std::{
        fmt,
        fs::File,
        io::{BufWriter, Write},
        path::{Path, PathBuf},
    },
};

pub const PROBLEM_FILE: &str = "01_q.ppm";

/// 右半分の上下が入れ替わった円を 2x2 に分割した問題.
pub const PROBLEM: ProblemHeader = ProblemHeader {
    cols: 2,
    rows: 2,
    select_limit: 1,
    select_cost: 3,
    swap_cost: 1,
};

/// 出力先のファイルを書き込み用に開けなかったことを表す.
#[derive(Debug)]
pub struct OutputUnavailable {
    pub path: PathBuf,
}

impl fmt::Display for OutputUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to create {}", self.path.display())
    }
}

/// 右上の断片を選んで下と入れ替えれば元の円に戻る.
pub fn answer() -> String {
    let rots = [Rot::R0; 4];
    let ops = [Operation {
        select: Pos::new(1, 0),
        movements: vec![Movement::Down],
    }];
    kaitou::ans(&ops, &rots)
}

/// 問題画像のバイト列を作る.
pub fn problem_bytes() -> Result<Vec<u8>> {
    let pixels = circle::render();
    log::debug!("rendered {} pixels", pixels.len());

    let mut buf = vec![];
    ppm::write_ppm(
        &mut buf,
        &PROBLEM,
        circle::SIDE_LENGTH,
        circle::SIDE_LENGTH,
        &pixels,
    )
    .context("failed to encode the problem image")?;
    Ok(buf)
}

/// `dir` に問題画像を書き出す. 解答は `answer` で得られる.
pub fn generate(dir: impl AsRef<Path>) -> Result<()> {
    let problem = problem_bytes()?;
    let path = dir.as_ref().join(PROBLEM_FILE);
    save(&path, &problem)?;
    log::info!("saved the problem to {}", path.display());

    Ok(())
}

fn save(path: &Path, data: &[u8]) -> Result<()> {
    let file = File::create(path).with_context(|| OutputUnavailable {
        path: path.to_owned(),
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .with_context(|| format!("failed to write {}", path.display()))
}
