/// Fenced code block type.
///
/// Code blocks are raw zones: their content is emitted verbatim and never
/// reaches the inline tokenizer.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    /// Outer and inner tags: `<pre><code>`.
    pub const TAGS: (&'static str, &'static str) = ("pre", "code");

    /// Returns true if `block` both opens and closes with a backtick fence.
    pub fn matches(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// Returns true if `line` is a fence line (an info string may follow).
    pub fn is_fence_line(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// Extracts the code between the fences.
    ///
    /// When the block spans several lines and both its first and last lines
    /// are fences, the interior lines are joined with `\n`. Otherwise the
    /// fence markers are cut off the ends directly, which covers one-line
    /// blocks like ```` ```x``` ````.
    pub fn inner(block: &str) -> String {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.len() >= 2
            && Self::is_fence_line(lines[0])
            && Self::is_fence_line(lines[lines.len() - 1])
        {
            return lines[1..lines.len() - 1].join("\n");
        }

        let rest = block.strip_prefix(Self::BACKTICKS).unwrap_or(block);
        let rest = rest.strip_suffix(Self::BACKTICKS).unwrap_or(rest);
        rest.trim_matches('\n').to_string()
    }
}
