//! Run counters for the end-of-run summary. No persistence, stderr only.

pub struct RunStats {
    pub subjects: u64,
    pub blank_subjects: u64,
    pub generated: u64,
    pub retained: u64,
    pub files_written: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            subjects: 0,
            blank_subjects: 0,
            generated: 0,
            retained: 0,
            files_written: 0,
        }
    }

    pub fn tick_subject(&mut self, blank: bool) {
        self.subjects += 1;
        if blank {
            self.blank_subjects += 1;
        }
    }

    pub fn log_generation(&mut self, generated: usize, retained: usize) {
        self.generated += generated as u64;
        self.retained += retained as u64;
    }

    pub fn tick_file(&mut self) {
        self.files_written += 1;
    }

    pub fn report(&self, master_len: usize) {
        eprintln!(
            "Processed {} subjects ({} blank), generated {} candidates, retained {} after policy",
            self.subjects, self.blank_subjects, self.generated, self.retained
        );
        eprintln!(
            "Wrote {} wordlist files, master list holds {} unique entries",
            self.files_written, master_len
        );
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
