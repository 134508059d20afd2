use image::GrayImage;

use crate::sampling::Frame;

/// Converts a frame into a congestion proxy. Implementations must be pure
/// and total: every decodable frame maps to a count, nothing is raised to
/// the caller.
pub trait DensityEstimator: Send + Sync {
    fn estimate(&self, frame: &Frame) -> u32;
}

/// Fixed-count estimator. Useful as a stand-in when running without camera
/// footage, and as a test collaborator.
pub struct UniformDensity(pub u32);

impl DensityEstimator for UniformDensity {
    fn estimate(&self, _frame: &Frame) -> u32 {
        self.0
    }
}

/// Contour-style vehicle counter: grayscale, blur, gradient edge mask,
/// connected components above a minimum pixel area.
pub struct ContourDensityEstimator {
    /// Gradient magnitude above which a pixel counts as an edge.
    pub edge_threshold: u32,
    /// Components with fewer edge pixels than this are noise, not vehicles.
    pub min_blob_area: usize,
}

impl Default for ContourDensityEstimator {
    fn default() -> Self {
        // tuned against the same kind of overhead footage as the thresholds
        // of the classic Canny(80, 200) + contourArea > 400 pipeline
        Self { edge_threshold: 200, min_blob_area: 400 }
    }
}

impl DensityEstimator for ContourDensityEstimator {
    fn estimate(&self, frame: &Frame) -> u32 {
        let gray = frame.to_luma8();
        let blurred = box_blur(&gray);
        let edges = edge_mask(&blurred, self.edge_threshold);
        count_blobs(&edges, blurred.width() as usize, self.min_blob_area)
    }
}

/// 3x3 mean filter, border pixels passed through.
fn box_blur(img: &GrayImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut out = img.clone();

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut sum: u32 = 0;
            for dy in 0..3 {
                for dx in 0..3 {
                    sum += img.get_pixel(x + dx - 1, y + dy - 1).0[0] as u32;
                }
            }
            out.put_pixel(x, y, image::Luma([(sum / 9) as u8]));
        }
    }
    out
}

/// Sobel gradient magnitude, thresholded to a binary mask. The one-pixel
/// border stays clear.
fn edge_mask(img: &GrayImage, threshold: u32) -> Vec<bool> {
    let (width, height) = img.dimensions();
    let mut mask = vec![false; (width * height) as usize];
    if width < 3 || height < 3 {
        return mask;
    }

    let pixel = |x: u32, y: u32| -> i32 { img.get_pixel(x, y).0[0] as i32 };

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let gx = pixel(x + 1, y - 1) + 2 * pixel(x + 1, y) + pixel(x + 1, y + 1)
                - pixel(x - 1, y - 1)
                - 2 * pixel(x - 1, y)
                - pixel(x - 1, y + 1);
            let gy = pixel(x - 1, y + 1) + 2 * pixel(x, y + 1) + pixel(x + 1, y + 1)
                - pixel(x - 1, y - 1)
                - 2 * pixel(x, y - 1)
                - pixel(x + 1, y - 1);

            if (gx.unsigned_abs() + gy.unsigned_abs()) > threshold {
                mask[(y * width + x) as usize] = true;
            }
        }
    }
    mask
}

/// Count 8-connected components of the edge mask with at least `min_area`
/// pixels. Iterative flood fill, no recursion.
fn count_blobs(mask: &[bool], width: usize, min_area: usize) -> u32 {
    if width == 0 {
        return 0;
    }
    let height = mask.len() / width;
    let mut visited = vec![false; mask.len()];
    let mut stack = Vec::new();
    let mut blobs = 0;

    for start in 0..mask.len() {
        if !mask[start] || visited[start] {
            continue;
        }

        let mut area = 0;
        visited[start] = true;
        stack.push(start);

        while let Some(index) = stack.pop() {
            area += 1;
            let x = index % width;
            let y = index / width;

            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    let neighbor = (ny as usize) * width + nx as usize;
                    if mask[neighbor] && !visited[neighbor] {
                        visited[neighbor] = true;
                        stack.push(neighbor);
                    }
                }
            }
        }

        if area >= min_area {
            blobs += 1;
        }
    }

    blobs
}
