use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bm_core::{PackedBitmap, pack_binary_u8, unpack_binary_u8};
use bm_morph::{close3x3, dilate3x3, erode3x3, open3x3, outline};
use clap::{Args, Parser, Subcommand};
use image::GrayImage;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "bm_gallery")]
#[command(about = "Run bitmorph operators on external image fixtures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(name = "outline")]
    Outline(CommonArgs),
    #[command(name = "morphology")]
    Morphology(CommonArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "out/gallery")]
    out: PathBuf,
    /// Gray levels at or above this value count as set pixels.
    #[arg(long, default_value_t = 128)]
    threshold: u8,
}

#[derive(Debug, Clone, Serialize)]
struct MetaOutline {
    operation: &'static str,
    connectivity: &'static str,
    threshold: u8,
    width: u32,
    height: u32,
    row_bytes: usize,
    pixel_rule: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct MetaMorphology {
    operation: &'static str,
    structuring_element: &'static str,
    se_size: usize,
    threshold: u8,
    width: u32,
    height: u32,
    row_bytes: usize,
    pixel_rule: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Outline(args) => run_outline(args),
        Command::Morphology(args) => run_morphology(args),
    }
}

fn run_outline(args: CommonArgs) -> Result<()> {
    let case_dir = prepare_case(&args, "outline")?;
    let (packed, width, height) = load_binary_input(&args.input, args.threshold)?;

    let outlined = outline(&packed.as_view()).context("computing outline")?;

    save_packed_image(case_dir.join("outline.png"), &outlined, width)?;
    write_json(
        case_dir.join("meta.json"),
        &MetaOutline {
            operation: "outline",
            connectivity: "8",
            threshold: args.threshold,
            width,
            height,
            row_bytes: packed.row_bytes(),
            pixel_rule: "binary pixel set iff gray value >= threshold",
        },
    )?;

    Ok(())
}

fn run_morphology(args: CommonArgs) -> Result<()> {
    let case_dir = prepare_case(&args, "morphology")?;
    let (packed, width, height) = load_binary_input(&args.input, args.threshold)?;
    let view = packed.as_view();

    let dilated = dilate3x3(&view).context("computing dilate3x3")?;
    let eroded = erode3x3(&view).context("computing erode3x3")?;
    let opened = open3x3(&view).context("computing open3x3")?;
    let closed = close3x3(&view).context("computing close3x3")?;

    save_packed_image(case_dir.join("dilate.png"), &dilated, width)?;
    save_packed_image(case_dir.join("erode.png"), &eroded, width)?;
    save_packed_image(case_dir.join("open.png"), &opened, width)?;
    save_packed_image(case_dir.join("close.png"), &closed, width)?;

    write_json(
        case_dir.join("meta.json"),
        &MetaMorphology {
            operation: "dilate+erode+open+close",
            structuring_element: "square",
            se_size: 3,
            threshold: args.threshold,
            width,
            height,
            row_bytes: packed.row_bytes(),
            pixel_rule: "binary pixel set iff gray value >= threshold",
        },
    )?;

    Ok(())
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    if !common.input.is_file() {
        bail!("input path is not a file: {}", common.input.display());
    }

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    Ok(case_dir)
}

fn load_binary_input(path: &Path, threshold: u8) -> Result<(PackedBitmap, u32, u32)> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();

    let binary: Vec<u8> = luma
        .into_raw()
        .iter()
        .map(|&v| u8::from(v >= threshold))
        .collect();

    let packed = pack_binary_u8(w as usize, h as usize, &binary)
        .with_context(|| format!("packing input bitmap from {}", path.display()))?;

    Ok((packed, w, h))
}

fn save_packed_image(path: PathBuf, bmp: &PackedBitmap, width: u32) -> Result<()> {
    let unpacked = unpack_binary_u8(&bmp.as_view());
    let full_width = bmp.width_px();
    let height = bmp.height();

    // Crop each unpacked row back to the fixture width, dropping pad pixels.
    let mut data = Vec::with_capacity(width as usize * height);
    for y in 0..height {
        let start = y * full_width;
        data.extend_from_slice(&unpacked[start..start + width as usize]);
    }

    let gray = GrayImage::from_raw(width, height as u32, data)
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}
