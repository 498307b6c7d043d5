//! Integration tests for the Easel engine crates.
//!
//! End-to-end scenarios that cross crate boundaries the way the
//! application does: device colors in through `easel-color`, strokes
//! composited by `easel-composite`, results rendered by
//! `easel-display`.

#[cfg(test)]
mod tests {
    use easel_color::{ColorSpace, RGBA_F16, RGBA_F32};
    use easel_composite::{CompositeOp, engine, parallel};
    use easel_core::Rgb8;
    use easel_display::DisplayFormat;

    /// Fill a `w * h` buffer with one device color at one opacity.
    fn solid(cs: &dyn ColorSpace, w: usize, h: usize, color: Rgb8, alpha: u8) -> Vec<u8> {
        let mut buf = vec![0u8; w * h * cs.pixel_size()];
        for px in buf.chunks_exact_mut(cs.pixel_size()) {
            cs.from_rgb8_with_alpha(color, alpha, px);
        }
        buf
    }

    fn pixel_at(cs: &dyn ColorSpace, buf: &[u8], x: usize, y: usize, w: usize) -> (Rgb8, u8) {
        let i = (y * w + x) * cs.pixel_size();
        cs.to_rgb8_with_alpha(&buf[i..i + cs.pixel_size()])
    }

    fn close(a: u8, b: u8, tol: u8) -> bool {
        a.abs_diff(b) <= tol
    }

    #[test]
    fn test_masked_stroke_both_depths() {
        for cs in [&RGBA_F32 as &dyn ColorSpace, &RGBA_F16 as &dyn ColorSpace] {
            let w = 3;
            let mut canvas = solid(cs, w, 1, Rgb8::BLACK, 0);
            let brush = solid(cs, w, 1, Rgb8::new(255, 0, 0), 255);
            // full, half, and no coverage
            let mask = [255u8, 128, 0];

            cs.bit_blt(
                &mut canvas,
                w * cs.pixel_size(),
                &brush,
                w * cs.pixel_size(),
                Some(&mask),
                w,
                1,
                w,
                255,
                CompositeOp::Over,
            );

            let (c0, a0) = pixel_at(cs, &canvas, 0, 0, w);
            assert_eq!((c0, a0), (Rgb8::new(255, 0, 0), 255), "{}", cs.id());

            let (c1, a1) = pixel_at(cs, &canvas, 1, 0, w);
            assert_eq!(c1, Rgb8::new(255, 0, 0), "{}", cs.id());
            assert!(close(a1, 128, 1), "{}: half coverage gave {a1}", cs.id());

            let (_, a2) = pixel_at(cs, &canvas, 2, 0, w);
            assert_eq!(a2, 0, "{}", cs.id());
        }
    }

    #[test]
    fn test_brush_opacity_scales_coverage() {
        for cs in [&RGBA_F32 as &dyn ColorSpace, &RGBA_F16 as &dyn ColorSpace] {
            let mut canvas = solid(cs, 1, 1, Rgb8::BLACK, 255);
            let brush = solid(cs, 1, 1, Rgb8::WHITE, 255);
            cs.bit_blt(
                &mut canvas,
                cs.pixel_size(),
                &brush,
                cs.pixel_size(),
                None,
                0,
                1,
                1,
                128,
                CompositeOp::Over,
            );
            let (c, a) = pixel_at(cs, &canvas, 0, 0, 1);
            assert_eq!(a, 255);
            for v in [c.r, c.g, c.b] {
                assert!(close(v, 128, 1), "{}: got {v}", cs.id());
            }
        }
    }

    #[test]
    fn test_eraser_respects_mask_protection() {
        let cs: &dyn ColorSpace = &RGBA_F32;
        let w = 2;
        let mut canvas = solid(cs, w, 1, Rgb8::new(255, 0, 0), 255);
        // an erasing source is one with zero alpha
        let brush = solid(cs, w, 1, Rgb8::BLACK, 0);
        let mask = [255u8, 0];

        cs.bit_blt(
            &mut canvas,
            w * cs.pixel_size(),
            &brush,
            w * cs.pixel_size(),
            Some(&mask),
            w,
            1,
            w,
            255,
            CompositeOp::Erase,
        );

        let (c0, a0) = pixel_at(cs, &canvas, 0, 0, w);
        assert_eq!(a0, 0);
        // erasing drops coverage, not paint
        assert_eq!(c0, Rgb8::new(255, 0, 0));

        let (_, a1) = pixel_at(cs, &canvas, 1, 0, w);
        assert_eq!(a1, 255);
    }

    #[test]
    fn test_every_menu_mode_composites() {
        let cs: &dyn ColorSpace = &RGBA_F32;
        for &op in cs.user_visible_composite_ops() {
            assert!(op.is_implemented(), "{op} listed but not implemented");
            assert_eq!(CompositeOp::from_id(op.id()), Some(op));

            let mut canvas = solid(cs, 1, 1, Rgb8::new(40, 140, 90), 255);
            let brush = solid(cs, 1, 1, Rgb8::new(200, 60, 255), 255);
            cs.bit_blt(
                &mut canvas,
                cs.pixel_size(),
                &brush,
                cs.pixel_size(),
                None,
                0,
                1,
                1,
                255,
                op,
            );
            let (_, a) = pixel_at(cs, &canvas, 0, 0, 1);
            assert_eq!(a, 255, "{op} broke alpha");
        }
    }

    #[test]
    fn test_menu_mode_ids_are_stable() {
        let ids: Vec<u8> = easel_composite::user_visible_composite_ops()
            .iter()
            .map(|op| op.id())
            .collect();
        assert_eq!(ids, [0, 10, 13, 12, 11, 34, 35, 26, 27, 28, 29, 30, 31]);
    }

    #[test]
    fn test_reserved_document_mode_is_silent() {
        let cs: &dyn ColorSpace = &RGBA_F32;
        // a document may carry any persisted id; reserved ones no-op
        let op = CompositeOp::from_id(22).unwrap();
        assert!(!op.is_implemented());

        let mut canvas = solid(cs, 1, 1, Rgb8::new(9, 9, 9), 77);
        let before = canvas.clone();
        let brush = solid(cs, 1, 1, Rgb8::WHITE, 255);
        cs.bit_blt(
            &mut canvas,
            cs.pixel_size(),
            &brush,
            cs.pixel_size(),
            None,
            0,
            1,
            1,
            255,
            op,
        );
        assert_eq!(canvas, before);
        assert_eq!(CompositeOp::from_id(38), None);
    }

    #[test]
    fn test_half_and_single_agree_through_eight_bit() {
        let arithmetic_modes = [
            CompositeOp::Over,
            CompositeOp::Multiply,
            CompositeOp::Divide,
            CompositeOp::Screen,
            CompositeOp::Overlay,
            CompositeOp::Dodge,
            CompositeOp::Burn,
            CompositeOp::Darken,
            CompositeOp::Lighten,
        ];
        for op in arithmetic_modes {
            let mut results = Vec::new();
            for cs in [&RGBA_F32 as &dyn ColorSpace, &RGBA_F16 as &dyn ColorSpace] {
                let mut canvas = solid(cs, 1, 1, Rgb8::new(40, 140, 90), 255);
                let brush = solid(cs, 1, 1, Rgb8::new(200, 60, 250), 255);
                cs.bit_blt(
                    &mut canvas,
                    cs.pixel_size(),
                    &brush,
                    cs.pixel_size(),
                    None,
                    0,
                    1,
                    1,
                    255,
                    op,
                );
                results.push(pixel_at(cs, &canvas, 0, 0, 1));
            }
            let (single, half) = (results[0], results[1]);
            for (a, b) in [
                (single.0.r, half.0.r),
                (single.0.g, half.0.g),
                (single.0.b, half.0.b),
                (single.1, half.1),
            ] {
                assert!(close(a, b, 2), "{op}: f32 {a} vs f16 {b}");
            }
        }
    }

    #[test]
    fn test_hue_family_swaps_components() {
        let cs: &dyn ColorSpace = &RGBA_F32;
        let red = Rgb8::new(255, 0, 0);
        let blue = Rgb8::new(0, 0, 255);

        let run = |op: CompositeOp| {
            let mut canvas = solid(cs, 1, 1, blue, 255);
            let brush = solid(cs, 1, 1, red, 255);
            cs.bit_blt(
                &mut canvas,
                cs.pixel_size(),
                &brush,
                cs.pixel_size(),
                None,
                0,
                1,
                1,
                255,
                op,
            );
            pixel_at(cs, &canvas, 0, 0, 1).0
        };

        // source hue over blue of equal saturation and value is red
        assert_eq!(run(CompositeOp::Hue), red);
        // destination hue wins in the other modes
        assert_eq!(run(CompositeOp::Saturation), blue);
        assert_eq!(run(CompositeOp::Value), blue);
        // color carries source hue and saturation at destination lightness
        assert_eq!(run(CompositeOp::Color), red);
    }

    #[test]
    fn test_parallel_bands_match_sequential() {
        let rows = 9;
        let cols = 5;
        let row_bytes = cols * 16;
        let dst_stride = row_bytes + 16;
        let src_stride = row_bytes + 8;
        let mask_stride = cols + 2;

        let mut fill = {
            let mut state = 0x2f6e2b1u32;
            move |buf: &mut [u8]| {
                for slot in buf.chunks_exact_mut(4) {
                    state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                    let v = (state >> 8) as f32 / ((u32::MAX >> 8) as f32);
                    slot.copy_from_slice(&v.to_ne_bytes());
                }
            }
        };

        let mut dst = vec![0u8; (rows - 1) * dst_stride + row_bytes];
        let mut src = vec![0u8; (rows - 1) * src_stride + row_bytes];
        fill(&mut dst);
        fill(&mut src);
        let mask: Vec<u8> = (0..(rows - 1) * mask_stride + cols)
            .map(|i| if i % 5 == 0 { 255 } else { (i * 37) as u8 })
            .collect();

        let mut sequential = dst.clone();
        engine::bit_blt::<f32>(
            &mut sequential,
            dst_stride,
            &src,
            src_stride,
            Some(&mask),
            mask_stride,
            rows,
            cols,
            200,
            CompositeOp::Screen,
        );

        parallel::bit_blt_par::<f32>(
            &mut dst,
            dst_stride,
            &src,
            src_stride,
            Some(&mask),
            mask_stride,
            rows,
            cols,
            200,
            CompositeOp::Screen,
            4,
        )
        .unwrap();

        assert_eq!(dst, sequential);
    }

    #[test]
    fn test_stroke_renders_to_middle_gray() {
        let cs: &dyn ColorSpace = &RGBA_F32;
        let w = 2;
        let h = 2;
        let mut canvas = solid(cs, w, h, Rgb8::BLACK, 255);
        let brush = solid(cs, w, h, Rgb8::new(46, 46, 46), 255);
        cs.bit_blt(
            &mut canvas,
            w * cs.pixel_size(),
            &brush,
            w * cs.pixel_size(),
            None,
            0,
            h,
            w,
            255,
            CompositeOp::Over,
        );

        let img = cs
            .to_display_image(&canvas, w as u32, h as u32, 0.0, DisplayFormat::Bgra8)
            .unwrap();
        for px in img.pixels.chunks_exact(4) {
            assert_eq!(px, [85, 85, 85, 255]);
        }
    }

    #[test]
    fn test_smudge_mix_stays_between_sources() {
        let cs: &dyn ColorSpace = &RGBA_F32;
        let red = solid(cs, 1, 1, Rgb8::new(255, 0, 0), 255);
        let blue = solid(cs, 1, 1, Rgb8::new(0, 0, 255), 255);
        let mut mixed = vec![0u8; cs.pixel_size()];
        cs.mix_colors(&[&red, &blue], &[127, 128], &mut mixed);

        let full = cs.difference(&red, &blue);
        let to_red = cs.difference(&mixed, &red);
        let to_blue = cs.difference(&mixed, &blue);
        assert_eq!(full, 255);
        assert!(to_red < full && to_blue < full);
        assert!(close(to_red, to_blue, 1));
        assert_eq!(cs.alpha8(&mixed), 255);
    }
}
