//! Copies color into fully transparent pixels near opaque regions, keeping
//! their alpha at zero. Smooth resampling filters average the RGB of
//! transparent pixels (usually black) into the icon's edge, which shows up
//! as a dark fringe after compositing; bleeding first removes the fringe.

use image::{Rgba, RgbaImage};

/// Lanczos3 samples up to 3 source pixels past an edge, so this many
/// dilation passes cover every pixel a resize can touch.
const PASSES: u32 = 4;

const DIRECTIONS: &[(i32, i32)] = &[
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn alpha_bleed(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }

    // Pixels whose RGB holds a real color and may be sampled from.
    let mut colored: Vec<bool> = img.pixels().map(|p| p[3] != 0).collect();

    for _ in 0..PASSES {
        let snapshot = colored.clone();
        let mut changed = false;

        for y in 0..h {
            for x in 0..w {
                let idx = (y * w + x) as usize;
                if snapshot[idx] {
                    continue;
                }

                let mut sum = (0u32, 0u32, 0u32);
                let mut contributing = 0u32;

                for (dx, dy) in DIRECTIONS {
                    let nx = x as i32 + dx;
                    let ny = y as i32 + dy;
                    if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);

                    // Sampling only pixels from the snapshot keeps each pass
                    // independent of its own writes.
                    if snapshot[(ny * w + nx) as usize] {
                        let source = img.get_pixel(nx, ny);
                        sum.0 += source[0] as u32;
                        sum.1 += source[1] as u32;
                        sum.2 += source[2] as u32;
                        contributing += 1;
                    }
                }

                if contributing > 0 {
                    img.put_pixel(
                        x,
                        y,
                        Rgba([
                            (sum.0 / contributing) as u8,
                            (sum.1 / contributing) as u8,
                            (sum.2 / contributing) as u8,
                            0,
                        ]),
                    );
                    colored[idx] = true;
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }
}
