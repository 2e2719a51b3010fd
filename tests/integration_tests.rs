use anyhow::Ok;
use image::{ImageBuffer, Rgb, Rgba};
use rand::RngCore;
use std::fs;
use std::path::Path;
use stego_link::{
    cli::{EmbedArgs, ExtractArgs},
    handler::{handle_embed, handle_extract},
};
use tempfile::tempdir;

/// 一个辅助函数，用于创建一个带有随机像素的测试图像
fn create_test_image(path: &Path, width: u32, height: u32) {
    let mut img_buf = ImageBuffer::new(width, height);
    let mut raw_pixels = vec![0u8; (width * height * 4) as usize];
    rand::rng().fill_bytes(&mut raw_pixels);

    img_buf
        .pixels_mut()
        .zip(raw_pixels.chunks_exact(4))
        .for_each(|(pixel, chunk)| {
            *pixel = Rgba([chunk[0], chunk[1], chunk[2], 255]);
        });

    img_buf.save(path).expect("Failed to create test image.");
}

/// 一个辅助函数，用于创建一个随机像素的 RGB JPEG 测试图像
fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let mut img_buf = ImageBuffer::new(width, height);
    let mut raw_pixels = vec![0u8; (width * height * 3) as usize];
    rand::rng().fill_bytes(&mut raw_pixels);

    img_buf
        .pixels_mut()
        .zip(raw_pixels.chunks_exact(3))
        .for_each(|(pixel, chunk)| {
            *pixel = Rgb([chunk[0], chunk[1], chunk[2]]);
        });

    img_buf.save(path).expect("Failed to create test JPEG image.");
}

/// 验证从嵌入到提取的完整流程
#[test]
fn test_handle_embed_and_extract_integration() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.png");
    let stego_image_path = dir.path().join("stego.png");
    let extracted_text_path = dir.path().join("extracted.txt");

    create_test_image(&original_image_path, 100, 100);
    let original_url = "https://example.com/路径?q=测试#frag";

    // 2. 测试 handle_embed
    let embed_args = EmbedArgs {
        image: original_image_path.clone(),
        url: original_url.to_string(),
        dest: Some(stego_image_path.clone()),
        force: false,
    };
    handle_embed(embed_args)?;
    assert!(stego_image_path.exists(), "Stego image should be created.");

    // 3. 测试 handle_extract
    let extract_args = ExtractArgs {
        image: stego_image_path.clone(),
        text: Some(extracted_text_path.clone()),
        force: false,
    };
    handle_extract(extract_args)?;
    assert!(
        extracted_text_path.exists(),
        "Extracted text file should be created."
    );

    // 4. 验证结果
    let extracted_url = fs::read_to_string(&extracted_text_path)?;
    assert_eq!(
        original_url, extracted_url,
        "Extracted URL must match the original."
    );

    Ok(())
}

/// 验证当用户不提供输出路径时，是否能正确生成默认路径并完成操作
#[test]
fn test_handle_embed_with_default_dest() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.png");
    create_test_image(&original_image_path, 100, 100);

    let original_url = "https://example.com/default-path";

    // 2. 测试 handle_embed，不提供 dest 路径
    let embed_args = EmbedArgs {
        image: original_image_path.clone(),
        url: original_url.to_string(),
        dest: None, // 关键：测试 None 的情况
        force: false,
    };
    handle_embed(embed_args)?;

    // 验证默认的隐写图像文件是否已创建
    let expected_stego_path = dir.path().join("original_stego.png");
    assert!(
        expected_stego_path.exists(),
        "Default stego image should be created at: {:?}",
        expected_stego_path
    );

    // 3. 从默认路径的图像中提取并验证
    let extracted_text_path = dir.path().join("extracted.txt");
    let extract_args = ExtractArgs {
        image: expected_stego_path,
        text: Some(extracted_text_path.clone()),
        force: false,
    };
    handle_extract(extract_args)?;

    let extracted_url = fs::read_to_string(&extracted_text_path)?;
    assert_eq!(
        original_url, extracted_url,
        "URL extracted from the default file must match the original."
    );

    Ok(())
}

/// 验证不提供输出路径时，提取结果直接打印到标准输出
#[test]
fn test_handle_extract_to_stdout() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.png");
    let stego_image_path = dir.path().join("stego.png");
    create_test_image(&original_image_path, 50, 50);

    let embed_args = EmbedArgs {
        image: original_image_path,
        url: "https://example.com".to_string(),
        dest: Some(stego_image_path.clone()),
        force: false,
    };
    handle_embed(embed_args)?;

    let extract_args = ExtractArgs {
        image: stego_image_path,
        text: None, // 关键：测试 None 的情况
        force: false,
    };
    let result = handle_extract(extract_args);
    assert!(
        result.is_ok(),
        "Extraction to stdout should succeed for a valid stego image."
    );

    Ok(())
}

/// 验证覆盖保护机制以及 `--force` 标志是否按预期工作
#[test]
fn test_overwrite_protection_and_force_flag() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("image.png");
    let dest_path = dir.path().join("dest.png");

    create_test_image(&image_path, 50, 50);

    // 2. 场景一：测试覆盖保护
    // 先创建一个同名的目标文件，模拟“文件已存在”的场景
    fs::write(&dest_path, "this is a dummy file to be overwritten")?;
    assert!(dest_path.exists());

    // 构建参数，不使用 --force
    let embed_args_no_force = EmbedArgs {
        image: image_path.clone(),
        url: "https://example.com".to_string(),
        dest: Some(dest_path.clone()),
        force: false,
    };

    // 执行并断言操作会失败
    let result = handle_embed(embed_args_no_force);
    assert!(
        result.is_err(),
        "Execution should fail without --force when file exists."
    );
    if let Err(e) = result {
        assert!(e.to_string().contains("Output file already exists"));
    }

    // 3. 场景二：测试强制覆盖
    // 构建参数，这次使用 --force
    let embed_args_with_force = EmbedArgs {
        image: image_path.clone(),
        url: "https://example.com".to_string(),
        dest: Some(dest_path.clone()),
        force: true,
    };

    // 执行并断言操作会成功
    let result = handle_embed(embed_args_with_force);
    assert!(
        result.is_ok(),
        "Execution should succeed with --force when file exists."
    );

    // 验证文件确实被覆盖（内容不再是 "this is a dummy file..."）
    let dummy_content = fs::read(&dest_path)?;
    assert_ne!(dummy_content, b"this is a dummy file to be overwritten");

    Ok(())
}

/// 验证空间不足时的错误处理
#[test]
fn test_handle_embed_not_enough_space() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("small.png");
    let dest_path = dir.path().join("dest.png");

    // 创建一个非常小的图片，URL 却非常长
    create_test_image(&image_path, 10, 10);
    let large_url = format!("https://example.com/{}", "a".repeat(5000));

    // 2. 执行并断言错误
    let embed_args = EmbedArgs {
        image: image_path,
        url: large_url,
        dest: Some(dest_path),
        force: false,
    };
    let result = handle_embed(embed_args);

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("Not enough space"));
    }

    Ok(())
}

/// 验证 JPEG 输入被归一化后输出为无损 PNG，往返仍然成立
#[test]
fn test_jpeg_input_forces_png_output() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let jpeg_path = dir.path().join("photo.jpg");
    create_test_jpeg(&jpeg_path, 64, 64);

    let original_url = "https://example.com/promo";

    // 2. 嵌入，使用默认输出路径
    let embed_args = EmbedArgs {
        image: jpeg_path,
        url: original_url.to_string(),
        dest: None,
        force: false,
    };
    handle_embed(embed_args)?;

    // 默认输出必须是去掉 .jpg 后的 `_stego.png`
    let expected_stego_path = dir.path().join("photo_stego.png");
    assert!(
        expected_stego_path.exists(),
        "Stego output must be a PNG next to the JPEG source."
    );

    // 3. 从 PNG 中提取并验证；若输出经过有损压缩，这一步必然失败
    let extracted_text_path = dir.path().join("extracted.txt");
    let extract_args = ExtractArgs {
        image: expected_stego_path,
        text: Some(extracted_text_path.clone()),
        force: false,
    };
    handle_extract(extract_args)?;

    let extracted_url = fs::read_to_string(&extracted_text_path)?;
    assert_eq!(
        original_url, extracted_url,
        "URL extracted from the PNG output must match the original."
    );

    Ok(())
}
